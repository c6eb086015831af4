//! Add and Edit Client Pages
//!
//! Both routes share `ClientEditor`; the edit route first loads the record
//! and prefills the fields from it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::{redirect_after, use_route_id};
use crate::api::ApiClient;
use crate::components::{AppShell, FormNotice, StatePanel, TextField};
use crate::context::use_app;
use crate::fetcher::use_remote;
use crate::forms::{submit, ClientForm, SubmitState};
use crate::models::Client;
use crate::store::{store_signed_out, use_session_store};
use crate::view_state::{never_empty, ViewState};

#[component]
pub fn AddClientPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="page client-form-page">
                <A href="/clients" attr:class="back-link">"Back to clients"</A>
                <h1>"Add client"</h1>
                <ClientEditor initial=ClientForm::default() editing=None/>
            </div>
        </AppShell>
    }
}

#[component]
pub fn EditClientPage() -> impl IntoView {
    let id = use_route_id();
    let remote = use_remote(
        move |api: ApiClient| {
            let id = id.get();
            async move { api.get_client(&id).await }
        },
        never_empty,
    );
    let phase = Signal::derive(move || remote.state.with(ViewState::phase));

    view! {
        <AppShell>
            <div class="page client-form-page">
                <A href="/clients" attr:class="back-link">"Back to clients"</A>
                <h1>"Edit client"</h1>
                <StatePanel phase=phase noun="client" on_retry=remote.reload back=("/clients", "Back to clients")/>
                {move || {
                    remote.state.with(|s| {
                        s.ready().map(|client: &Client| {
                            view! {
                                <ClientEditor initial=ClientForm::from(client) editing=Some(client.id.clone())/>
                            }
                        })
                    })
                }}
            </div>
        </AppShell>
    }
}

/// Client fields with submit handling. `editing` holds the id being
/// updated; `None` creates a new client.
#[component]
fn ClientEditor(initial: ClientForm, editing: Option<String>) -> impl IntoView {
    let app = use_app();
    let store = use_session_store();
    let navigate = StoredValue::new(use_navigate());

    let name = RwSignal::new(initial.name);
    let email = RwSignal::new(initial.email);
    let phone = RwSignal::new(initial.phone);
    let company = RwSignal::new(initial.company);
    let state = RwSignal::new(SubmitState::default());
    let editing = StoredValue::new(editing);
    let is_edit = editing.with_value(Option::is_some);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(SubmitState::is_submitting) {
            return;
        }

        let form = ClientForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            company: company.get_untracked(),
        };
        let target = editing.get_value();
        let api = app.api();
        let delay = app.redirect_delay();
        state.set(SubmitState::Submitting);

        spawn_local(async move {
            let outcome = submit(&form, |draft| async move {
                match target {
                    Some(id) => api.update_client(&id, &draft).await,
                    None => api.create_client(&draft).await,
                }
            })
            .await;

            match outcome {
                Ok(()) => {
                    let _ = state.try_set(SubmitState::Success);
                    redirect_after(navigate, delay, "/clients").await;
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

    let success = if is_edit {
        "Client updated successfully! Redirecting..."
    } else {
        "Client added successfully! Redirecting..."
    };

    view! {
        <form class="entity-form" on:submit=on_submit novalidate=true>
            <TextField label="Client name" field="name" value=name state=state required=true/>
            <TextField
                label="Email address"
                field="email"
                value=email
                state=state
                input_type="email"
                placeholder="client@example.com"
                required=true
            />
            <TextField label="Phone number" field="phone" value=phone state=state input_type="tel" required=true/>
            <TextField label="Company" field="company" value=company state=state placeholder="Optional"/>
            <FormNotice state=state success=success/>
            <div class="form-actions">
                <A href="/clients" attr:class="btn btn-secondary">"Cancel"</A>
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || state.with(|s| s.is_submitting() || *s == SubmitState::Success)
                >
                    {move || match (state.with(SubmitState::is_submitting), is_edit) {
                        (true, _) => "Saving...",
                        (false, true) => "Save changes",
                        (false, false) => "Add client",
                    }}
                </button>
            </div>
        </form>
    }
}
