//! Signed-In User Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::UserProfile;

/// Who is signed in, shared by the sidebar, dashboard and profile page
#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    /// Profile from `GET /api/auth/me`, once fetched
    pub profile: Option<UserProfile>,
    /// Mirrors whether a token is held
    pub signed_in: bool,
}

impl SessionState {
    pub fn new(signed_in: bool) -> Self {
        Self {
            signed_in,
            ..Default::default()
        }
    }

    /// A new token was issued; any cached profile belongs to whoever held
    /// the previous one and must be fetched again.
    pub fn sign_in(&mut self) {
        self.profile = None;
        self.signed_in = true;
    }

    pub fn sign_out(&mut self) {
        self.profile = None;
        self.signed_in = false;
    }
}

/// Type alias for the store
pub type SessionStore = Store<SessionState>;

/// Get the session store from context
pub fn use_session_store() -> SessionStore {
    expect_context::<SessionStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_signed_in(store: &SessionStore) {
    store.update(SessionState::sign_in);
}

pub fn store_set_profile(store: &SessionStore, profile: UserProfile) {
    store.profile().set(Some(profile));
}

/// Forget the user after logout or a rejected token
pub fn store_signed_out(store: &SessionStore) {
    store.update(SessionState::sign_out);
}

/// Display name for greetings, "there" until the profile arrives
pub fn store_display_name(store: &SessionStore) -> String {
    store
        .profile()
        .with(|p| p.as_ref().map(|p| p.name.clone()))
        .unwrap_or_else(|| "there".to_string())
}
