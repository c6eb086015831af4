//! Form Validation and Submission
//!
//! Each form validates into the payload the backend accepts. Submission
//! only reaches the network when validation passes.

mod auth;
mod client;
mod project;

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::OnceLock;

use regex::Regex;

use crate::api::ApiError;

pub use auth::{LoginForm, PasswordStrength, SignupForm, ROLES};
pub use client::ClientForm;
pub use project::ProjectForm;

/// Validation messages keyed by field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Forget the error on `field`, as the user edits it
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(payload)` when no errors were recorded
    pub fn into_result<T>(self, payload: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(payload())
        } else {
            Err(self)
        }
    }
}

/// A form that validates into a request payload
pub trait Form {
    type Payload;

    fn validate(&self) -> Result<Self::Payload, FieldErrors>;
}

/// Where a form is in its submit cycle
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitState {
    Editing {
        errors: FieldErrors,
        server_error: Option<String>,
    },
    Submitting,
    /// Saved; the page navigates away after a delay
    Success,
    /// The backend rejected the session
    SignedOut,
}

impl Default for SubmitState {
    fn default() -> Self {
        SubmitState::editing()
    }
}

impl SubmitState {
    pub fn editing() -> Self {
        SubmitState::Editing { errors: FieldErrors::new(), server_error: None }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        match self {
            SubmitState::Editing { errors, .. } => errors.get(field).map(String::from),
            _ => None,
        }
    }

    pub fn server_error(&self) -> Option<String> {
        match self {
            SubmitState::Editing { server_error, .. } => server_error.clone(),
            _ => None,
        }
    }

    /// Drop the error on one field, keeping the rest
    pub fn clear_field(&mut self, field: &str) {
        if let SubmitState::Editing { errors, .. } = self {
            errors.clear(field);
        }
    }
}

/// Validate `form` and, only if it passes, hand the payload to `send`.
/// Failures come back as the state the form should return to.
pub async fn submit<F, R, Fut>(form: &F, send: impl FnOnce(F::Payload) -> Fut) -> Result<R, SubmitState>
where
    F: Form,
    Fut: Future<Output = Result<R, ApiError>>,
{
    let payload = form.validate().map_err(|errors| {
        log::debug!("form rejected locally: {} field error(s)", errors.len());
        SubmitState::Editing { errors, server_error: None }
    })?;

    send(payload).await.map_err(|err| match err {
        ApiError::Unauthorized => SubmitState::SignedOut,
        other => SubmitState::Editing {
            errors: FieldErrors::new(),
            server_error: Some(other.to_string()),
        },
    })
}

/// `local@domain.tld` with no whitespace
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

/// Trimmed value, or `None` when blank
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(String);

    impl Form for Named {
        type Payload = String;

        fn validate(&self) -> Result<String, FieldErrors> {
            let mut errors = FieldErrors::new();
            if self.0.trim().is_empty() {
                errors.insert("name", "Name is required");
            }
            errors.into_result(|| self.0.clone())
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@c.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  x "), Some("x".to_string()));
        assert_eq!(non_blank("   "), None);
    }

    #[tokio::test]
    async fn test_invalid_form_never_sends() {
        let mut sent = false;
        let outcome: Result<(), SubmitState> = submit(&Named(" ".into()), |_| {
            sent = true;
            async { Ok(()) }
        })
        .await;

        assert!(!sent);
        let state = outcome.unwrap_err();
        assert_eq!(state.field_error("name").as_deref(), Some("Name is required"));
        assert_eq!(state.server_error(), None);
    }

    #[tokio::test]
    async fn test_server_error_is_inline() {
        let outcome: Result<(), SubmitState> = submit(&Named("Ada".into()), |_| async {
            Err(ApiError::Failed("Email already exists".into()))
        })
        .await;

        assert_eq!(outcome.unwrap_err().server_error().as_deref(), Some("Email already exists"));
    }

    #[tokio::test]
    async fn test_unauthorized_signs_out() {
        let outcome: Result<(), SubmitState> =
            submit(&Named("Ada".into()), |_| async { Err(ApiError::Unauthorized) }).await;
        assert_eq!(outcome.unwrap_err(), SubmitState::SignedOut);
    }

    #[test]
    fn test_clear_field() {
        let mut errors = FieldErrors::new();
        errors.insert("email", "Email is required");
        errors.insert("phone", "Phone number is required");
        let mut state = SubmitState::Editing { errors, server_error: None };

        state.clear_field("email");
        assert_eq!(state.field_error("email"), None);
        assert!(state.field_error("phone").is_some());
    }
}
