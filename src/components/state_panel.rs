//! State Panel Component
//!
//! Renders every non-ready `Phase` of a data-backed page: spinner, empty
//! notice, not-found, load failure with retry. An unauthorized phase
//! forgets the signed-in user and redirects to the login page.

use leptos::prelude::*;
use leptos_router::components::{Redirect, A};

use crate::store::{store_signed_out, use_session_store};
use crate::view_state::Phase;

#[component]
pub fn StatePanel(
    #[prop(into)] phase: Signal<Phase>,
    /// Plural noun for messages, e.g. "clients"
    noun: &'static str,
    /// Retry the failed fetch
    #[prop(into)]
    on_retry: Callback<()>,
    /// Link shown on not-found and failure, (href, label)
    #[prop(optional)]
    back: Option<(&'static str, &'static str)>,
    /// Replaces the default empty-state text
    #[prop(optional, into)]
    empty_view: Option<ViewFn>,
) -> impl IntoView {
    let store = use_session_store();
    Effect::new(move |_| {
        if phase.with(|p| *p == Phase::Unauthorized) {
            store_signed_out(&store);
        }
    });

    let back_link = move || {
        back.map(|(href, label)| {
            view! { <A href=href attr:class="back-link">{label}</A> }
        })
    };

    move || match phase.get() {
        Phase::Ready => ().into_any(),
        Phase::Loading => view! {
            <div class="state-panel loading">
                <div class="spinner"></div>
                <p>{format!("Loading {}...", noun)}</p>
            </div>
        }
        .into_any(),
        Phase::Empty => match empty_view.clone() {
            Some(empty) => empty.run(),
            None => view! {
                <div class="state-panel empty">
                    <p>{format!("No {} found.", noun)}</p>
                </div>
            }
            .into_any(),
        },
        Phase::NotFound => view! {
            <div class="state-panel not-found">
                <h2>"Not found"</h2>
                <p>{format!("The requested {} does not exist or was removed.", noun)}</p>
                {back_link()}
            </div>
        }
        .into_any(),
        Phase::Unauthorized => view! { <Redirect path="/login"/> }.into_any(),
        Phase::Failed(message) => view! {
            <div class="state-panel error">
                <p class="error-message">{message}</p>
                <button class="btn btn-secondary" on:click=move |_| on_retry.run(())>
                    "Try again"
                </button>
                {back_link()}
            </div>
        }
        .into_any(),
    }
}
