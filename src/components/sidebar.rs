//! Sidebar and Authenticated Shell
//!
//! Every signed-in page renders inside `AppShell`: it redirects to the
//! login page when no token is held, loads the user profile once, and
//! lays out the navigation sidebar beside the page content.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_navigate;

use crate::api::ApiError;
use crate::context::use_app;
use crate::store::{
    store_set_profile, store_signed_out, use_session_store, SessionStateStoreFields,
};

const NAV_LINKS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/clients", "Clients"),
    ("/projects", "Projects"),
    ("/profile", "Profile"),
];

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let app = use_app();
    let store = use_session_store();

    if !app.is_signed_in() {
        log::info!("no session, redirecting to login");
        return view! { <Redirect path="/login"/> }.into_any();
    }

    if store.profile().with_untracked(Option::is_none) {
        let api = app.api();
        spawn_local(async move {
            match api.me().await {
                Ok(profile) => store_set_profile(&store, profile),
                Err(ApiError::Unauthorized) => store_signed_out(&store),
                Err(e) => log::warn!("could not load profile: {}", e),
            }
        });
    }

    view! {
        <div class="app-layout">
            <Sidebar/>
            <main class="main-content">{children()}</main>
        </div>
    }
    .into_any()
}

#[component]
fn Sidebar() -> impl IntoView {
    let app = use_app();
    let store = use_session_store();
    let navigate = StoredValue::new(use_navigate());

    let user_name = move || {
        store
            .profile()
            .with(|p| p.as_ref().map(|p| p.name.clone()))
            .unwrap_or_default()
    };
    let initials = move || {
        store
            .profile()
            .with(|p| p.as_ref().map(|p| p.initials()))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        app.api().logout();
        store_signed_out(&store);
        navigate.with_value(|nav| nav("/login", Default::default()));
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <A href="/dashboard">"ProjectDesk"</A>
            </div>
            <nav class="sidebar-nav">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| view! { <A href=*href>{*label}</A> })
                    .collect_view()}
            </nav>
            <div class="sidebar-user">
                <span class="avatar">{initials}</span>
                <span class="user-name">{user_name}</span>
            </div>
            <button class="btn btn-logout" on:click=on_logout>"Log out"</button>
        </aside>
    }
}
