//! Clients List Page

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::ApiClient;
use crate::components::{AppShell, DeleteConfirmButton, StatCard, StatePanel};
use crate::context::use_app;
use crate::fetcher::use_remote;
use crate::filter::{distinct_companies, filter_clients, ClientQuery, ClientStats};
use crate::models::Client;
use crate::view_state::{vec_is_empty, ViewState};

#[component]
pub fn ClientsPage() -> impl IntoView {
    let app = use_app();
    let remote = use_remote(|api: ApiClient| async move { api.list_clients().await }, vec_is_empty);
    let phase = Signal::derive(move || remote.state.with(ViewState::phase));

    let search = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    // Id of the client whose delete is in flight
    let deleting = RwSignal::new(None::<String>);
    let action_error = RwSignal::new(None::<String>);

    let query = Memo::new(move |_| ClientQuery {
        text: search.get(),
        company: Some(company.get()).filter(|c| !c.is_empty()),
    });
    let visible = Memo::new(move |_| {
        remote
            .state
            .with(|s| s.ready().map(|all| filter_clients(all, &query.get())).unwrap_or_default())
    });
    let companies = Memo::new(move |_| {
        remote
            .state
            .with(|s| s.ready().map(|all| distinct_companies(all)).unwrap_or_default())
    });
    let stats = Memo::new(move |_| {
        remote
            .state
            .with(|s| s.ready().map(|all| ClientStats::of(all, Utc::now())).unwrap_or_default())
    });

    let delete_client = move |id: String| {
        if deleting.with_untracked(Option::is_some) {
            return;
        }
        deleting.set(Some(id.clone()));
        action_error.set(None);
        let api = app.api();

        spawn_local(async move {
            let outcome = api.delete_client(&id).await;
            let message = remote.state.try_update(|s| s.apply_delete(&id, outcome)).flatten();
            if message.is_some() {
                let _ = action_error.try_set(message);
            }
            let _ = deleting.try_set(None);
        });
    };

    view! {
        <AppShell>
            <div class="page clients-page">
                <header class="page-header">
                    <div>
                        <h1>"Clients"</h1>
                        <p class="page-subtitle">"Manage your client relationships"</p>
                    </div>
                    <A href="/clients/add-client" attr:class="btn btn-primary">"Add client"</A>
                </header>

                <StatePanel
                    phase=phase
                    noun="clients"
                    on_retry=remote.reload
                    empty_view=|| view! {
                        <div class="state-panel empty">
                            <p>"No clients yet."</p>
                            <A href="/clients/add-client">"Add your first client"</A>
                        </div>
                    }
                />

                <Show when=move || remote.state.with(|s| s.ready().is_some())>
                    <section class="stats-row">
                        <StatCard label="Total clients" value=Signal::derive(move || stats.get().total.to_string())/>
                        <StatCard label="Companies" value=Signal::derive(move || stats.get().companies.to_string())/>
                        <StatCard
                            label="Added this month"
                            value=Signal::derive(move || stats.get().added_this_month.to_string())
                        />
                    </section>

                    <div class="toolbar">
                        <input
                            type="search"
                            class="search-input"
                            placeholder="Search by name, email or company"
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                        <select
                            prop:value=move || company.get()
                            on:change=move |ev| company.set(event_target_value(&ev))
                        >
                            <option value="">"All companies"</option>
                            <For
                                each=move || companies.get()
                                key=|name| name.clone()
                                children=move |name| view! { <option value=name.clone()>{name.clone()}</option> }
                            />
                        </select>
                    </div>

                    {move || action_error.get().map(|m| view! { <div class="notice notice-error">{m}</div> })}

                    <Show
                        when=move || !visible.with(Vec::is_empty)
                        fallback=|| view! { <p class="muted">"No clients match your search."</p> }
                    >
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Phone"</th>
                                    <th>"Company"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || visible.get()
                                    key=|client| client.id.clone()
                                    children=move |client: Client| {
                                        let id = client.id.clone();
                                        let view_href = format!("/clients/{}", client.id);
                                        let edit_href = format!("/clients/edit/{}", client.id);
                                        let company = client.company_name().unwrap_or("-").to_string();
                                        let Client { name, email, phone, .. } = client;
                                        let busy = Signal::derive({
                                            let id = id.clone();
                                            move || deleting.with(|d| d.as_deref() == Some(id.as_str()))
                                        });
                                        view! {
                                            <tr>
                                                <td>
                                                    <A href=view_href.clone()>{name}</A>
                                                </td>
                                                <td>{email}</td>
                                                <td>{phone}</td>
                                                <td>{company}</td>
                                                <td class="row-actions">
                                                    <A href=view_href>"View"</A>
                                                    <A href=edit_href>"Edit"</A>
                                                    <DeleteConfirmButton
                                                        button_class="btn-link delete-btn"
                                                        busy=busy
                                                        on_confirm=move |_| delete_client(id.clone())
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
