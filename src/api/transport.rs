//! HTTP Transport
//!
//! The seam between the API client and the network. The browser build sends
//! through reqwest (which uses `fetch` on wasm32); tests swap in a fake.

use async_trait::async_trait;
use serde_json::Value;

use super::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One outgoing request, relative to the API origin
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute path such as `/api/clients/c1`
    pub path: String,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

/// Status and body text of a completed exchange
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the backend
///
/// Futures are not `Send`: in the browser everything runs on the main thread.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// Perform the exchange. Only failures to complete it are errors;
    /// non-2xx statuses come back as responses.
    async fn send(&self, origin: &str, request: &ApiRequest) -> Result<RawResponse, ApiError>;
}

/// reqwest-backed transport
#[derive(Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, origin: &str, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        let url = format!("{}{}", origin.trim_end_matches('/'), request.path);

        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
            Method::Delete => self.http.delete(&url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
