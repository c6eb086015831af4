//! Profile Page

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::{AppShell, StatePanel};
use crate::fetcher::use_remote;
use crate::models::{format_day, UserProfile};
use crate::store::{store_set_profile, use_session_store};
use crate::view_state::{never_empty, ViewState};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = use_session_store();
    let remote = use_remote(|api: ApiClient| async move { api.me().await }, never_empty);
    let phase = Signal::derive(move || remote.state.with(ViewState::phase));

    // Keep the sidebar in step with the freshest profile
    Effect::new(move |_| {
        if let Some(profile) = remote.state.with(|s| s.ready().cloned()) {
            store_set_profile(&store, profile);
        }
    });

    view! {
        <AppShell>
            <div class="page profile-page">
                <h1>"Profile"</h1>
                <StatePanel phase=phase noun="profile" on_retry=remote.reload back=("/dashboard", "Back to dashboard")/>
                {move || remote.state.with(|s| s.ready().map(profile_card))}
            </div>
        </AppShell>
    }
}

fn profile_card(profile: &UserProfile) -> impl IntoView {
    let since = profile
        .member_since()
        .map(|t| format_day(Some(t.date_naive())))
        .unwrap_or_else(|| "Unknown".to_string());
    let role = profile.role.clone().unwrap_or_else(|| "user".to_string());

    view! {
        <section class="panel profile-card">
            <div class="profile-header">
                <span class="avatar avatar-lg">{profile.initials()}</span>
                <div>
                    <h2>{profile.name.clone()}</h2>
                    <span class="role-badge">{role}</span>
                </div>
            </div>
            <dl>
                <dt>"Email"</dt>
                <dd>{profile.email.clone()}</dd>
                <dt>"Member since"</dt>
                <dd>{since}</dd>
            </dl>
        </section>
    }
}
