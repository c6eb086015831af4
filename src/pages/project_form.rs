//! Create and Edit Project Pages
//!
//! The client selector needs the client list, which is a secondary
//! resource: when it fails the form still renders, with a notice, and the
//! edit route keeps the project's current client selectable.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::{redirect_after, use_route_id};
use crate::api::{with_secondary, ApiClient, ApiError};
use crate::components::{AppShell, FormNotice, StatePanel, TextAreaField, TextField};
use crate::context::use_app;
use crate::fetcher::use_remote;
use crate::forms::{submit, ProjectForm, SubmitState};
use crate::models::{Client, Project, ProjectStatus};
use crate::store::{store_signed_out, use_session_store};
use crate::view_state::{never_empty, ViewState};

/// Selectable client, (id, display name)
type ClientChoice = (String, String);

fn choices(clients: &[Client], current: Option<&Project>) -> Vec<ClientChoice> {
    let mut choices: Vec<ClientChoice> = clients
        .iter()
        .map(|c| {
            let label = match c.company_name() {
                Some(company) => format!("{} ({})", c.name, company),
                None => c.name.clone(),
            };
            (c.id.clone(), label)
        })
        .collect();

    if let Some(current) = current.and_then(|p| p.client.as_ref()) {
        if !choices.iter().any(|(id, _)| *id == current.id) {
            let label = if current.name.is_empty() { current.id.clone() } else { current.name.clone() };
            choices.insert(0, (current.id.clone(), label));
        }
    }
    choices
}

#[component]
pub fn CreateProjectPage() -> impl IntoView {
    let remote = use_remote(
        |api: ApiClient| async move {
            match api.list_clients().await {
                Err(ApiError::Unauthorized) => Err(ApiError::Unauthorized),
                outcome => Ok(outcome.unwrap_or_else(|e| {
                    log::warn!("failed to fetch clients, continuing without them: {}", e);
                    Vec::new()
                })),
            }
        },
        never_empty,
    );
    let phase = Signal::derive(move || remote.state.with(ViewState::phase));

    view! {
        <AppShell>
            <div class="page project-form-page">
                <A href="/projects" attr:class="back-link">"Back to projects"</A>
                <h1>"Create project"</h1>
                <StatePanel phase=phase noun="clients" on_retry=remote.reload/>
                {move || {
                    remote.state.with(|s| {
                        s.ready().map(|clients: &Vec<Client>| {
                            view! {
                                <ProjectEditor
                                    initial=ProjectForm::for_create()
                                    clients=choices(clients, None)
                                    editing=None
                                />
                            }
                        })
                    })
                }}
            </div>
        </AppShell>
    }
}

#[component]
pub fn EditProjectPage() -> impl IntoView {
    let id = use_route_id();
    let remote = use_remote(
        move |api: ApiClient| {
            let id = id.get();
            async move { with_secondary("clients", api.get_project(&id), api.list_clients()).await }
        },
        never_empty,
    );
    let phase = Signal::derive(move || remote.state.with(ViewState::phase));

    view! {
        <AppShell>
            <div class="page project-form-page">
                <A href="/projects" attr:class="back-link">"Back to projects"</A>
                <h1>"Edit project"</h1>
                <StatePanel phase=phase noun="project" on_retry=remote.reload back=("/projects", "Back to projects")/>
                {move || {
                    remote.state.with(|s| {
                        s.ready().map(|(project, clients)| {
                            view! {
                                <ProjectEditor
                                    initial=ProjectForm::for_edit(project)
                                    clients=choices(clients, Some(project))
                                    editing=Some(project.id.clone())
                                />
                            }
                        })
                    })
                }}
            </div>
        </AppShell>
    }
}

/// Project fields with submit handling. `editing` holds the id being
/// updated; `None` creates a new project.
#[component]
fn ProjectEditor(initial: ProjectForm, clients: Vec<ClientChoice>, editing: Option<String>) -> impl IntoView {
    let app = use_app();
    let store = use_session_store();
    let navigate = StoredValue::new(use_navigate());

    let description_required = initial.description_required;
    let title = RwSignal::new(initial.title);
    let description = RwSignal::new(initial.description);
    let client = RwSignal::new(initial.client);
    let status = RwSignal::new(initial.status);
    let start_date = RwSignal::new(initial.start_date);
    let end_date = RwSignal::new(initial.end_date);
    let state = RwSignal::new(SubmitState::default());
    let no_clients = clients.is_empty();
    let editing = StoredValue::new(editing);
    let is_edit = editing.with_value(Option::is_some);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(SubmitState::is_submitting) {
            return;
        }

        let form = ProjectForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            client: client.get_untracked(),
            status: status.get_untracked(),
            start_date: start_date.get_untracked(),
            end_date: end_date.get_untracked(),
            description_required,
        };
        let target = editing.get_value();
        let api = app.api();
        let delay = app.redirect_delay();
        state.set(SubmitState::Submitting);

        spawn_local(async move {
            let outcome = submit(&form, |draft| async move {
                match target {
                    Some(id) => api.update_project(&id, &draft).await,
                    None => api.create_project(&draft).await,
                }
            })
            .await;

            match outcome {
                Ok(()) => {
                    let _ = state.try_set(SubmitState::Success);
                    redirect_after(navigate, delay, "/projects").await;
                }
                Err(SubmitState::SignedOut) => {
                    store_signed_out(&store);
                    let _ = navigate.try_with_value(|nav| nav("/login", Default::default()));
                }
                Err(next) => {
                    let _ = state.try_set(next);
                }
            }
        });
    };

    let client_error = move || state.with(|s| s.field_error("client"));
    let success = if is_edit {
        "Project updated successfully! Redirecting..."
    } else {
        "Project created successfully! Redirecting..."
    };

    view! {
        <form class="entity-form" on:submit=on_submit novalidate=true>
            <TextField label="Project title" field="title" value=title state=state required=true/>
            <TextAreaField
                label="Description"
                field="description"
                value=description
                state=state
                required=description_required
            />

            <div class="form-group" class:has-error=move || client_error().is_some()>
                <label for="client">"Client"<span class="required">" *"</span></label>
                <select
                    id="client"
                    prop:value=move || client.get()
                    on:change=move |ev| {
                        client.set(event_target_value(&ev));
                        state.update(|s| s.clear_field("client"));
                    }
                >
                    <option value="">"Select a client"</option>
                    {clients
                        .into_iter()
                        .map(|(id, label)| view! { <option value=id>{label}</option> })
                        .collect_view()}
                </select>
                {no_clients.then_some(view! {
                    <span class="field-hint">
                        "No clients available. "
                        <A href="/clients/add-client">"Add a client first"</A>
                    </span>
                })}
                {move || client_error().map(|m| view! { <span class="field-error">{m}</span> })}
            </div>

            <div class="form-group">
                <label for="status">"Status"</label>
                <select
                    id="status"
                    prop:value=move || status.get().as_str()
                    on:change=move |ev| {
                        if let Some(next) = ProjectStatus::parse(&event_target_value(&ev)) {
                            status.set(next);
                        }
                    }
                >
                    {ProjectStatus::ALL
                        .into_iter()
                        .map(|st| view! { <option value=st.as_str()>{st.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="form-row">
                <TextField label="Start date" field="start_date" value=start_date state=state input_type="date"/>
                <TextField label="End date" field="end_date" value=end_date state=state input_type="date"/>
            </div>

            <FormNotice state=state success=success/>
            <div class="form-actions">
                <A href="/projects" attr:class="btn btn-secondary">"Cancel"</A>
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || state.with(|s| s.is_submitting() || *s == SubmitState::Success)
                >
                    {move || match (state.with(SubmitState::is_submitting), is_edit) {
                        (true, _) => "Saving...",
                        (false, true) => "Save changes",
                        (false, false) => "Create project",
                    }}
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_choices_keep_current_client() {
        let clients: Vec<Client> = serde_json::from_value(json!([
            {"_id": "c1", "name": "Ada", "email": "a@x.io", "company": "Analytical"},
            {"_id": "c2", "name": "Grace", "email": "g@x.io"}
        ]))
        .unwrap();
        let project: Project =
            serde_json::from_value(json!({"_id": "p1", "title": "A", "client": {"_id": "c9", "name": "Gone"}}))
                .unwrap();

        let listed = choices(&clients, None);
        assert_eq!(listed[0], ("c1".to_string(), "Ada (Analytical)".to_string()));
        assert_eq!(listed[1].1, "Grace");

        let with_current = choices(&clients, Some(&project));
        assert_eq!(with_current.len(), 3);
        assert_eq!(with_current[0], ("c9".to_string(), "Gone".to_string()));

        // Secondary failed: only the current client remains selectable
        assert_eq!(choices(&[], Some(&project)).len(), 1);
    }
}
