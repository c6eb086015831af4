//! ProjectDesk Frontend App
//!
//! Provides the shared context and store, and maps routes to pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{
    AddClientPage, ClientDetailPage, ClientsPage, CreateProjectPage, DashboardPage, EditClientPage,
    EditProjectPage, HomePage, LoginPage, ProfilePage, ProjectDetailPage, ProjectsPage, SignupPage,
};
use crate::store::SessionState;

#[component]
pub fn App(api: ApiClient, config: AppConfig) -> impl IntoView {
    let signed_in = api.session().is_authenticated();

    // Provide context to all children
    provide_context(AppContext::new(api, config));
    provide_context(Store::new(SessionState::new(signed_in)));

    // Static segments are listed before `:id` routes on the same prefix
    view! {
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/signup") view=SignupPage/>
                <Route path=path!("/dashboard") view=DashboardPage/>
                <Route path=path!("/profile") view=ProfilePage/>
                <Route path=path!("/clients") view=ClientsPage/>
                <Route path=path!("/clients/add-client") view=AddClientPage/>
                <Route path=path!("/clients/edit/:id") view=EditClientPage/>
                <Route path=path!("/clients/:id") view=ClientDetailPage/>
                <Route path=path!("/projects") view=ProjectsPage/>
                <Route path=path!("/projects/create-project") view=CreateProjectPage/>
                <Route path=path!("/projects/edit/:id") view=EditProjectPage/>
                <Route path=path!("/projects/view/:id") view=ProjectDetailPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="state-panel not-found">
            <h1>"Page not found"</h1>
            <A href="/">"Go home"</A>
        </div>
    }
}
