//! Projects List Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::ApiClient;
use crate::components::{AppShell, DeleteConfirmButton, StatCard, StatePanel, StatusBadge};
use crate::context::use_app;
use crate::fetcher::use_remote;
use crate::filter::{filter_projects, ProjectQuery, ProjectStats};
use crate::models::{format_day, Project, ProjectStatus};
use crate::view_state::{vec_is_empty, ViewState};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let app = use_app();
    let remote = use_remote(|api: ApiClient| async move { api.list_projects().await }, vec_is_empty);
    let phase = Signal::derive(move || remote.state.with(ViewState::phase));

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(None::<ProjectStatus>);
    let deleting = RwSignal::new(None::<String>);
    let action_error = RwSignal::new(None::<String>);

    let visible = Memo::new(move |_| {
        let query = ProjectQuery { text: search.get(), status: status.get() };
        remote
            .state
            .with(|s| s.ready().map(|all| filter_projects(all, &query)).unwrap_or_default())
    });
    let stats = Memo::new(move |_| {
        remote
            .state
            .with(|s| s.ready().map(|all| ProjectStats::of(all)).unwrap_or_default())
    });

    let delete_project = move |id: String| {
        if deleting.with_untracked(Option::is_some) {
            return;
        }
        deleting.set(Some(id.clone()));
        action_error.set(None);
        let api = app.api();

        spawn_local(async move {
            let outcome = api.delete_project(&id).await;
            let message = remote.state.try_update(|s| s.apply_delete(&id, outcome)).flatten();
            if message.is_some() {
                let _ = action_error.try_set(message);
            }
            let _ = deleting.try_set(None);
        });
    };

    view! {
        <AppShell>
            <div class="page projects-page">
                <header class="page-header">
                    <div>
                        <h1>"Projects"</h1>
                        <p class="page-subtitle">"Track every engagement from start to finish"</p>
                    </div>
                    <A href="/projects/create-project" attr:class="btn btn-primary">"New project"</A>
                </header>

                <StatePanel
                    phase=phase
                    noun="projects"
                    on_retry=remote.reload
                    empty_view=|| view! {
                        <div class="state-panel empty">
                            <p>"No projects yet."</p>
                            <A href="/projects/create-project">"Create your first project"</A>
                        </div>
                    }
                />

                <Show when=move || remote.state.with(|s| s.ready().is_some())>
                    <section class="stats-row">
                        <StatCard label="Total" value=Signal::derive(move || stats.get().total.to_string())/>
                        {ProjectStatus::ALL
                            .into_iter()
                            .map(|st| view! {
                                <StatCard
                                    label=st.label()
                                    value=Signal::derive(move || stats.get().count(st).to_string())
                                    accent=st.css_class()
                                />
                            })
                            .collect_view()}
                    </section>

                    <div class="toolbar">
                        <input
                            type="search"
                            class="search-input"
                            placeholder="Search by title or client"
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                        <select
                            prop:value=move || status.get().map(|s| s.as_str()).unwrap_or("")
                            on:change=move |ev| status.set(ProjectStatus::parse(&event_target_value(&ev)))
                        >
                            <option value="">"All statuses"</option>
                            {ProjectStatus::ALL
                                .into_iter()
                                .map(|st| view! { <option value=st.as_str()>{st.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    {move || action_error.get().map(|m| view! { <div class="notice notice-error">{m}</div> })}

                    <Show
                        when=move || !visible.with(Vec::is_empty)
                        fallback=|| view! { <p class="muted">"No projects match your filters."</p> }
                    >
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Client"</th>
                                    <th>"Status"</th>
                                    <th>"Start"</th>
                                    <th>"End"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || visible.get()
                                    key=|project| project.id.clone()
                                    children=move |project: Project| {
                                        let id = project.id.clone();
                                        let view_href = format!("/projects/view/{}", project.id);
                                        let edit_href = format!("/projects/edit/{}", project.id);
                                        let client = project.client_name().unwrap_or("-").to_string();
                                        let starts = format_day(project.starts_on());
                                        let ends = format_day(project.ends_on());
                                        let status = project.status;
                                        let title = project.title;
                                        let busy = Signal::derive({
                                            let id = id.clone();
                                            move || deleting.with(|d| d.as_deref() == Some(id.as_str()))
                                        });
                                        view! {
                                            <tr>
                                                <td>
                                                    <A href=view_href.clone()>{title}</A>
                                                </td>
                                                <td>{client}</td>
                                                <td><StatusBadge status=status/></td>
                                                <td>{starts}</td>
                                                <td>{ends}</td>
                                                <td class="row-actions">
                                                    <A href=view_href>"View"</A>
                                                    <A href=edit_href>"Edit"</A>
                                                    <DeleteConfirmButton
                                                        button_class="btn-link delete-btn"
                                                        busy=busy
                                                        on_confirm=move |_| delete_project(id.clone())
                                                    />
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </div>
        </AppShell>
    }
}
