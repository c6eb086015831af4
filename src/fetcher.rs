//! Remote Data Hook
//!
//! Runs a loader against the API on mount, and again whenever its tracked
//! inputs change or `reload` is called. Each run takes a ticket from a
//! `FetchGeneration`; a response whose ticket is no longer current is dropped.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ApiError};
use crate::context::use_app;
use crate::view_state::{FetchGeneration, ViewState};

/// A page's remote data and a way to fetch it again
pub struct Remote<T: Send + Sync + 'static> {
    pub state: RwSignal<ViewState<T>>,
    pub reload: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for Remote<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Remote<T> {}

/// Load `T` with `load`, settling into a `ViewState`. Signals read by
/// `load` before it returns its future are tracked.
pub fn use_remote<T, F, Fut>(load: F, is_empty: fn(&T) -> bool) -> Remote<T>
where
    T: Send + Sync + 'static,
    F: Fn(ApiClient) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let app = use_app();
    let state = RwSignal::new(ViewState::Loading);
    let generation = StoredValue::new(FetchGeneration::default());
    let load = StoredValue::new(load);

    let fetch = move || {
        let Some(ticket) = generation.try_with_value(FetchGeneration::begin) else {
            return;
        };
        let Some(pending) = load.try_with_value(|load| load(app.api())) else {
            return;
        };
        state.set(ViewState::Loading);

        spawn_local(async move {
            let outcome = pending.await;
            let current = generation
                .try_with_value(|g| g.is_current(ticket))
                .unwrap_or(false);
            if !current {
                log::debug!("dropping superseded response");
                return;
            }
            if let Err(e) = &outcome {
                if e.is_retryable() {
                    log::warn!("load failed: {}", e);
                }
            }
            let settled = ViewState::settle(outcome, is_empty);
            if let ViewState::Unauthorized = settled {
                log::info!("view needs a session, redirecting to login");
            }
            let _ = state.try_set(settled);
        });
    };

    Effect::new(move |_| fetch());

    Remote {
        state,
        reload: Callback::new(move |_| untrack(fetch)),
    }
}
