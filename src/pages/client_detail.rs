//! Client Profile Page
//!
//! The client record is primary; that client's projects are secondary and
//! show as an empty list when they fail to load.

use leptos::prelude::*;
use leptos_router::components::A;

use super::use_route_id;
use crate::api::{with_secondary, ApiClient};
use crate::components::{AppShell, StatCard, StatePanel, StatusBadge};
use crate::fetcher::use_remote;
use crate::filter::ProjectStats;
use crate::models::{format_day, Client, Project};
use crate::view_state::{never_empty, ViewState};

#[component]
pub fn ClientDetailPage() -> impl IntoView {
    let id = use_route_id();
    let remote = use_remote(
        move |api: ApiClient| {
            let id = id.get();
            async move {
                with_secondary("client projects", api.get_client(&id), api.list_client_projects(&id)).await
            }
        },
        never_empty,
    );
    let phase = Signal::derive(move || remote.state.with(ViewState::phase));

    view! {
        <AppShell>
            <div class="page client-detail">
                <A href="/clients" attr:class="back-link">"Back to clients"</A>
                <StatePanel phase=phase noun="client" on_retry=remote.reload back=("/clients", "Back to clients")/>
                {move || remote.state.with(|s| s.ready().map(|(client, projects)| client_body(client, projects)))}
            </div>
        </AppShell>
    }
}

fn client_body(client: &Client, projects: &[Project]) -> impl IntoView {
    let stats = ProjectStats::of(projects);
    let member_since = client
        .created()
        .map(|t| format_day(Some(t.date_naive())))
        .unwrap_or_else(|| "Unknown".to_string());

    view! {
        <header class="page-header">
            <div>
                <h1>{client.name.clone()}</h1>
                <p class="page-subtitle">{client.company_name().unwrap_or("Independent").to_string()}</p>
            </div>
            <A href=format!("/clients/edit/{}", client.id) attr:class="btn btn-secondary">"Edit client"</A>
        </header>

        <section class="panel contact">
            <h2>"Contact"</h2>
            <dl>
                <dt>"Email"</dt>
                <dd><a href=format!("mailto:{}", client.email)>{client.email.clone()}</a></dd>
                <dt>"Phone"</dt>
                <dd>{client.phone.clone()}</dd>
                <dt>"Client since"</dt>
                <dd>{member_since}</dd>
            </dl>
        </section>

        <section class="stats-row">
            <StatCard label="Projects" value=stats.total.to_string()/>
            <StatCard label="In progress" value=stats.in_progress.to_string()/>
            <StatCard label="Completed" value=stats.completed.to_string()/>
        </section>

        <section class="panel client-projects">
            <div class="panel-header">
                <h2>"Projects"</h2>
                <A href="/projects/create-project">"New project"</A>
            </div>
            {if projects.is_empty() {
                view! { <p class="muted">"No projects for this client yet."</p> }.into_any()
            } else {
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Status"</th>
                                <th>"Start"</th>
                                <th>"End"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {projects
                                .iter()
                                .map(|p| {
                                    let href = format!("/projects/view/{}", p.id);
                                    let title = p.title.clone();
                                    let status = p.status;
                                    let starts = format_day(p.starts_on());
                                    let ends = format_day(p.ends_on());
                                    view! {
                                        <tr>
                                            <td><A href=href>{title}</A></td>
                                            <td><StatusBadge status=status/></td>
                                            <td>{starts}</td>
                                            <td>{ends}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </section>
    }
}
