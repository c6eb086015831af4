//! API Error Categories

use thiserror::Error;

/// Why a backend call did not produce a payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP 404
    #[error("Not found")]
    NotFound,

    /// HTTP 401 on a protected call, or no token to send
    #[error("Unauthorized access")]
    Unauthorized,

    /// Any other non-2xx; carries the server message or a default
    #[error("{0}")]
    Failed(String),

    /// The request never completed
    #[error("Network error: {0}")]
    Network(String),

    /// The body did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-2xx status to its category
    pub fn from_status(status: u16, body: &str, fallback: &str) -> Self {
        match status {
            404 => ApiError::NotFound,
            401 => ApiError::Unauthorized,
            _ => ApiError::Failed(server_message(body).unwrap_or_else(|| fallback.to_string())),
        }
    }

    /// Generic failures the user may retry
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Failed(_) | ApiError::Network(_) | ApiError::Decode(_))
    }
}

/// The `message` field of a JSON error body, if any
pub fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_categories() {
        assert_eq!(ApiError::from_status(404, "", "x"), ApiError::NotFound);
        assert_eq!(ApiError::from_status(401, r#"{"message":"expired"}"#, "x"), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_status(500, r#"{"message":"Database down"}"#, "Failed to fetch clients"),
            ApiError::Failed("Database down".into())
        );
        assert_eq!(
            ApiError::from_status(502, "<html>bad gateway</html>", "Failed to fetch clients"),
            ApiError::Failed("Failed to fetch clients".into())
        );
    }

    #[test]
    fn test_blank_server_message_uses_fallback() {
        assert_eq!(
            ApiError::from_status(400, r#"{"message":"  "}"#, "Failed to save client"),
            ApiError::Failed("Failed to save client".into())
        );
    }

    #[test]
    fn test_retryable() {
        assert!(ApiError::Network("offline".into()).is_retryable());
        assert!(!ApiError::NotFound.is_retryable());
        assert!(!ApiError::Unauthorized.is_retryable());
    }
}
