//! Pages
//!
//! One component per route. Each page declares what it loads through
//! `use_remote` and renders the resulting `ViewState`.

mod auth;
mod client_detail;
mod client_form;
mod clients;
mod dashboard;
mod home;
mod profile;
mod project_detail;
mod project_form;
mod projects;

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;
use leptos_router::NavigateOptions;

pub use auth::{LoginPage, SignupPage};
pub use client_detail::ClientDetailPage;
pub use client_form::{AddClientPage, EditClientPage};
pub use clients::ClientsPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use profile::ProfilePage;
pub use project_detail::ProjectDetailPage;
pub use project_form::{CreateProjectPage, EditProjectPage};
pub use projects::ProjectsPage;

#[derive(Params, PartialEq, Clone, Debug)]
pub struct IdParams {
    pub id: Option<String>,
}

/// The `:id` route segment, empty until the router resolves it
pub fn use_route_id() -> Memo<String> {
    let params = use_params::<IdParams>();
    Memo::new(move |_| params.get().ok().and_then(|p| p.id).unwrap_or_default())
}

/// Wait `delay`, then navigate to `path` unless the page has been left
pub async fn redirect_after<N>(navigate: StoredValue<N>, delay: Duration, path: &str)
where
    N: Fn(&str, NavigateOptions) + Send + Sync + 'static,
{
    gloo_timers::future::sleep(delay).await;
    if navigate
        .try_with_value(|nav| nav(path, Default::default()))
        .is_none()
    {
        log::debug!("page left before redirect to {}", path);
    }
}
