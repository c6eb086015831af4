//! Session Token Holder
//!
//! The bearer token is the only signal of being signed in. It lives in a
//! `TokenStore` so the browser build can persist it and tests can fake it.

use std::sync::{Arc, Mutex, PoisonError};

use crate::config::TOKEN_KEY;

/// Backing storage for the bearer token
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn remove(&self);
}

/// Token kept in browser local storage so it survives reloads
pub struct LocalStorageTokens {
    key: &'static str,
}

impl LocalStorageTokens {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl TokenStore for LocalStorageTokens {
    fn load(&self) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(self.key).ok().flatten())
    }

    fn save(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(self.key, token).is_err() {
                    log::warn!("could not persist session token");
                }
            }
            None => log::warn!("local storage unavailable, session will not persist"),
        }
    }

    fn remove(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(self.key);
        }
    }
}

/// Token kept in memory only
#[derive(Default)]
pub struct MemoryTokens {
    token: Mutex<Option<String>>,
}

impl TokenStore for MemoryTokens {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
    }

    fn remove(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Handle to the current session, cheap to clone
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session persisted in browser local storage
    pub fn browser() -> Self {
        Self::new(Arc::new(LocalStorageTokens::new(TOKEN_KEY)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokens::default()))
    }

    /// Current token; an empty stored string counts as absent
    pub fn get(&self) -> Option<String> {
        self.store.load().filter(|t| !t.is_empty())
    }

    pub fn set(&self, token: &str) {
        self.store.save(token);
    }

    pub fn clear(&self) {
        self.store.remove();
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());

        session.set("t1");
        assert_eq!(session.get().as_deref(), Some("t1"));

        session.clear();
        assert_eq!(session.get(), None);
    }

    #[test]
    fn test_empty_token_is_absent() {
        let session = Session::in_memory();
        session.set("");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clones_share_storage() {
        let session = Session::in_memory();
        let other = session.clone();
        session.set("abc");
        assert_eq!(other.get().as_deref(), Some("abc"));
    }
}
