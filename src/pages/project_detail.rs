//! Project Details Page

use leptos::prelude::*;
use leptos_router::components::A;

use super::use_route_id;
use crate::api::ApiClient;
use crate::components::{AppShell, StatePanel, StatusBadge};
use crate::fetcher::use_remote;
use crate::models::{format_day, schedule_length, Project};
use crate::view_state::{never_empty, ViewState};

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let id = use_route_id();
    let remote = use_remote(
        move |api: ApiClient| {
            let id = id.get();
            async move { api.get_project(&id).await }
        },
        never_empty,
    );
    let phase = Signal::derive(move || remote.state.with(ViewState::phase));

    view! {
        <AppShell>
            <div class="page project-detail">
                <A href="/projects" attr:class="back-link">"Back to projects"</A>
                <StatePanel phase=phase noun="project" on_retry=remote.reload back=("/projects", "Back to projects")/>
                {move || remote.state.with(|s| s.ready().map(project_body))}
            </div>
        </AppShell>
    }
}

fn project_body(project: &Project) -> impl IntoView {
    let client = project.client.clone();
    let duration = schedule_length(project.starts_on(), project.ends_on());

    view! {
        <header class="page-header">
            <div>
                <h1>{project.title.clone()}</h1>
                <StatusBadge status=project.status/>
            </div>
            <A href=format!("/projects/edit/{}", project.id) attr:class="btn btn-secondary">"Edit project"</A>
        </header>

        <section class="panel">
            <h2>"Description"</h2>
            <p class="description">
                {project.description.clone().unwrap_or_else(|| "No description provided.".to_string())}
            </p>
        </section>

        <section class="panel schedule">
            <h2>"Schedule"</h2>
            <dl>
                <dt>"Start date"</dt>
                <dd>{format_day(project.starts_on())}</dd>
                <dt>"End date"</dt>
                <dd>{format_day(project.ends_on())}</dd>
                <dt>"Duration"</dt>
                <dd>{duration}</dd>
            </dl>
        </section>

        <section class="panel project-client">
            <h2>"Client"</h2>
            {match client {
                Some(c) => {
                    let label = if c.name.is_empty() { "View client".to_string() } else { c.name.clone() };
                    let href = format!("/clients/{}", c.id);
                    view! {
                        <dl>
                            <dt>"Name"</dt>
                            <dd><A href=href>{label}</A></dd>
                            <dt>"Email"</dt>
                            <dd>{c.email.unwrap_or_else(|| "-".to_string())}</dd>
                            <dt>"Phone"</dt>
                            <dd>{c.phone.unwrap_or_else(|| "-".to_string())}</dd>
                            <dt>"Company"</dt>
                            <dd>{c.company.unwrap_or_else(|| "-".to_string())}</dd>
                        </dl>
                    }
                    .into_any()
                }
                None => view! { <p class="muted">"No client assigned."</p> }.into_any(),
            }}
        </section>
    }
}
