//! View State Machine
//!
//! What a data-backed page is showing, plus the generation counter that
//! keeps a slow, superseded fetch from overwriting a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::api::ApiError;
use crate::models::{remove_by_id, Entity};

/// Per-page render state
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    /// Loaded, but there is nothing to show
    Empty,
    NotFound,
    Unauthorized,
    Failed(String),
}

/// `ViewState` without its payload, for rendering the non-ready panels
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Ready,
    Empty,
    NotFound,
    Unauthorized,
    Failed(String),
}

impl<T> ViewState<T> {
    /// Settle a fetch outcome. `is_empty` decides when a successful load
    /// should render as empty.
    pub fn settle(outcome: Result<T, ApiError>, is_empty: impl Fn(&T) -> bool) -> Self {
        match outcome {
            Ok(data) if is_empty(&data) => ViewState::Empty,
            Ok(data) => ViewState::Ready(data),
            Err(ApiError::NotFound) => ViewState::NotFound,
            Err(ApiError::Unauthorized) => ViewState::Unauthorized,
            Err(err) => ViewState::Failed(err.to_string()),
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            ViewState::Loading => Phase::Loading,
            ViewState::Ready(_) => Phase::Ready,
            ViewState::Empty => Phase::Empty,
            ViewState::NotFound => Phase::NotFound,
            ViewState::Unauthorized => Phase::Unauthorized,
            ViewState::Failed(msg) => Phase::Failed(msg.clone()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

impl<T: Entity> ViewState<Vec<T>> {
    /// Settle a delete request against a loaded list. The row goes only
    /// after a 2xx; the last removal moves the view to `Empty`. Returns the
    /// inline message for a failure that leaves the list untouched.
    pub fn apply_delete(&mut self, id: &str, outcome: Result<(), ApiError>) -> Option<String> {
        match outcome {
            Ok(()) => {
                if let Some(items) = self.ready_mut() {
                    remove_by_id(items, id);
                    if items.is_empty() {
                        *self = ViewState::Empty;
                    }
                }
                None
            }
            Err(ApiError::Unauthorized) => {
                *self = ViewState::Unauthorized;
                None
            }
            Err(err) => Some(err.to_string()),
        }
    }
}

/// Never treat a load as empty
pub fn never_empty<T>(_: &T) -> bool {
    false
}

/// Empty when the collection has no elements
pub fn vec_is_empty<T>(items: &Vec<T>) -> bool {
    items.is_empty()
}

/// Ticket for one fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Monotonic counter; only the latest ticket may settle the view
#[derive(Debug, Clone, Default)]
pub struct FetchGeneration(Arc<AtomicU64>);

impl FetchGeneration {
    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.0.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle() {
        let ready: ViewState<Vec<u8>> = ViewState::settle(Ok(vec![1]), vec_is_empty);
        assert_eq!(ready, ViewState::Ready(vec![1]));

        let empty: ViewState<Vec<u8>> = ViewState::settle(Ok(vec![]), vec_is_empty);
        assert_eq!(empty, ViewState::Empty);

        let kept: ViewState<Vec<u8>> = ViewState::settle(Ok(vec![]), never_empty);
        assert_eq!(kept, ViewState::Ready(vec![]));
    }

    #[test]
    fn test_settle_errors() {
        let not_found: ViewState<u8> = ViewState::settle(Err(ApiError::NotFound), never_empty);
        assert_eq!(not_found, ViewState::NotFound);

        let unauthorized: ViewState<u8> = ViewState::settle(Err(ApiError::Unauthorized), never_empty);
        assert_eq!(unauthorized, ViewState::Unauthorized);

        let failed: ViewState<u8> =
            ViewState::settle(Err(ApiError::Failed("Failed to fetch clients".into())), never_empty);
        assert_eq!(failed, ViewState::Failed("Failed to fetch clients".into()));
        assert_eq!(failed.phase(), Phase::Failed("Failed to fetch clients".into()));
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let generation = FetchGeneration::default();
        let first = generation.begin();
        assert!(generation.is_current(first));

        // User retries before the first response arrives
        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_clones_share_counter() {
        let generation = FetchGeneration::default();
        let ticket = generation.begin();
        generation.clone().begin();
        assert!(!generation.is_current(ticket));
    }

    #[test]
    fn test_ready_mut() {
        let mut state = ViewState::Ready(vec!["c1", "c2"]);
        if let Some(items) = state.ready_mut() {
            items.retain(|id| *id != "c1");
        }
        assert_eq!(state.ready(), Some(&vec!["c2"]));
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str);

    impl Entity for Row {
        fn id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_delete_success_removes_row() {
        let mut state = ViewState::Ready(vec![Row("c1"), Row("c2")]);
        assert_eq!(state.apply_delete("c1", Ok(())), None);
        assert_eq!(state, ViewState::Ready(vec![Row("c2")]));

        assert_eq!(state.apply_delete("c2", Ok(())), None);
        assert_eq!(state, ViewState::Empty);
    }

    #[test]
    fn test_delete_failure_keeps_list() {
        let mut state = ViewState::Ready(vec![Row("c1"), Row("c2")]);
        let message = state.apply_delete("c1", Err(ApiError::Failed("Failed to delete client".into())));
        assert_eq!(message.as_deref(), Some("Failed to delete client"));
        assert_eq!(state, ViewState::Ready(vec![Row("c1"), Row("c2")]));
    }

    #[test]
    fn test_delete_unauthorized() {
        let mut state = ViewState::Ready(vec![Row("p1")]);
        assert_eq!(state.apply_delete("p1", Err(ApiError::Unauthorized)), None);
        assert_eq!(state, ViewState::Unauthorized);
    }
}
