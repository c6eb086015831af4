//! Dashboard Page

use chrono::Utc;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::api::ApiClient;
use crate::components::{AppShell, StatCard, StatePanel, StatusBadge};
use crate::fetcher::use_remote;
use crate::filter::{
    project_counts, recent_items, upcoming_projects, ClientStats, ProjectStats, RecentKind,
};
use crate::models::{format_day, Client, Project, ProjectStatus};
use crate::store::{store_display_name, use_session_store};
use crate::view_state::{never_empty, ViewState};

const UPCOMING_WINDOW_DAYS: i64 = 7;
const UPCOMING_LIMIT: usize = 3;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_session_store();
    let remote = use_remote(
        |api: ApiClient| async move {
            let (projects, clients) = futures::future::join(api.list_projects(), api.list_clients()).await;
            Ok((projects?, clients?))
        },
        never_empty,
    );
    let phase = Signal::derive(move || remote.state.with(ViewState::phase));
    let greeting = move || format!("Welcome back, {}", store_display_name(&store));

    view! {
        <AppShell>
            <div class="page dashboard">
                <header class="page-header">
                    <div>
                        <h1>{greeting}</h1>
                        <p class="page-subtitle">{Utc::now().format("%A, %B %-d, %Y").to_string()}</p>
                    </div>
                    <div class="quick-links">
                        <A href="/clients/add-client" attr:class="btn btn-secondary">"New client"</A>
                        <A href="/projects/create-project" attr:class="btn btn-primary">"New project"</A>
                    </div>
                </header>
                <StatePanel phase=phase noun="dashboard" on_retry=remote.reload/>
                {move || {
                    remote
                        .state
                        .with(|s| s.ready().map(|(projects, clients)| dashboard_body(projects, clients)))
                }}
            </div>
        </AppShell>
    }
}

fn dashboard_body(projects: &[Project], clients: &[Client]) -> impl IntoView {
    let now = Utc::now();
    let project_stats = ProjectStats::of(projects);
    let client_stats = ClientStats::of(clients, now);
    let upcoming = upcoming_projects(projects, now.date_naive(), UPCOMING_WINDOW_DAYS, UPCOMING_LIMIT);
    let recent = recent_items(projects, clients);

    let counts = project_counts(projects);
    let mut busiest: Vec<(Client, usize)> = clients
        .iter()
        .filter_map(|c| counts.get(&c.id).map(|n| (c.clone(), *n)))
        .collect();
    busiest.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name.cmp(&b.0.name)));
    busiest.truncate(3);

    view! {
        <section class="stats-row">
            <StatCard label="Total projects" value=project_stats.total.to_string()/>
            <StatCard label="Clients" value=client_stats.total.to_string()/>
            <StatCard label="Completion" value=format!("{}%", project_stats.completion_percent())/>
            <StatCard label="New clients (30 days)" value=client_stats.added_this_month.to_string()/>
        </section>

        <section class="panel status-breakdown">
            <h2>"Projects by status"</h2>
            <ul>
                {ProjectStatus::ALL
                    .into_iter()
                    .map(|status| view! {
                        <li>
                            <StatusBadge status=Some(status)/>
                            <span class="count">{project_stats.count(status)}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </section>

        <div class="dashboard-columns">
            <section class="panel upcoming">
                <h2>"Starting this week"</h2>
                {if upcoming.is_empty() {
                    view! { <p class="muted">"Nothing starts in the next 7 days."</p> }.into_any()
                } else {
                    view! {
                        <ul>
                            {upcoming
                                .into_iter()
                                .map(|p| {
                                    let href = format!("/projects/view/{}", p.id);
                                    let starts = format_day(p.starts_on());
                                    let title = p.title;
                                    view! {
                                        <li>
                                            <A href=href>{title}</A>
                                            <span class="muted">{starts}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }}
            </section>

            <section class="panel recent">
                <h2>"Recent activity"</h2>
                {if recent.is_empty() {
                    view! { <p class="muted">"No clients or projects yet."</p> }.into_any()
                } else {
                    view! {
                        <ul>
                            {recent
                                .into_iter()
                                .map(|item| {
                                    let (kind, href) = match item.kind {
                                        RecentKind::Project => ("Project", format!("/projects/view/{}", item.id)),
                                        RecentKind::Client => ("Client", format!("/clients/{}", item.id)),
                                    };
                                    let title = item.title;
                                    view! {
                                        <li>
                                            <span class="tag">{kind}</span>
                                            <A href=href>{title}</A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }}
            </section>

            <section class="panel top-clients">
                <h2>"Most active clients"</h2>
                {if busiest.is_empty() {
                    view! { <p class="muted">"No projects assigned to clients yet."</p> }.into_any()
                } else {
                    view! {
                        <ul>
                            {busiest
                                .into_iter()
                                .map(|(client, n)| {
                                    let href = format!("/clients/{}", client.id);
                                    let name = client.name;
                                    view! {
                                        <li>
                                            <A href=href>{name}</A>
                                            <span class="muted">
                                                {format!("{} project{}", n, if n == 1 { "" } else { "s" })}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }}
            </section>
        </div>
    }
}
