//! REST API Client
//!
//! Frontend bindings to the backend, organized by resource. Every call goes
//! through `ApiClient::execute`, which attaches the session token, maps
//! status codes to `ApiError`, and ends the session on a 401.

mod error;
mod transport;
mod auth;
mod clients;
mod projects;

#[cfg(test)]
pub(crate) mod testing;

use std::future::Future;
use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::session::Session;

pub use error::ApiError;
pub use transport::{ApiRequest, HttpTransport, Method, RawResponse, Transport};

/// Whether a call needs the bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Public,
    Protected,
}

/// Handle to the backend, cheap to clone
#[derive(Clone)]
pub struct ApiClient {
    origin: Arc<str>,
    session: Session,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(origin: impl Into<String>, session: Session, transport: Arc<dyn Transport>) -> Self {
        let origin: String = origin.into();
        Self {
            origin: Arc::from(origin.trim_end_matches('/')),
            session,
            transport,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    async fn execute(
        &self,
        method: Method,
        path: String,
        body: Option<serde_json::Value>,
        access: Access,
        fallback: &str,
    ) -> Result<String, ApiError> {
        let bearer = match access {
            Access::Public => None,
            Access::Protected => match self.session.get() {
                Some(token) => Some(token),
                None => {
                    log::info!("no session for {} {}, not sending", method.as_str(), path);
                    return Err(ApiError::Unauthorized);
                }
            },
        };

        let request = ApiRequest { method, path, bearer, body };
        log::debug!("{} {}", request.method.as_str(), request.path);

        let response = self.transport.send(&self.origin, &request).await.map_err(|e| {
            log::error!("{} {} failed: {}", request.method.as_str(), request.path, e);
            e
        })?;

        if response.is_success() {
            return Ok(response.body);
        }

        let err = match ApiError::from_status(response.status, &response.body, fallback) {
            // A 401 from login means bad credentials, not an expired session
            ApiError::Unauthorized if access == Access::Public => ApiError::Failed(
                error::server_message(&response.body).unwrap_or_else(|| fallback.to_string()),
            ),
            ApiError::Unauthorized => {
                log::info!("session rejected by server, signing out");
                self.session.clear();
                ApiError::Unauthorized
            }
            other => other,
        };
        log::warn!(
            "{} {} -> {}: {}",
            request.method.as_str(),
            request.path,
            response.status,
            err
        );
        Err(err)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: String, fallback: &str) -> Result<T, ApiError> {
        let body = self.execute(Method::Get, path, None, Access::Protected, fallback).await?;
        decode(&body)
    }

    /// GET a collection, accepting a bare array or one wrapped under a key
    async fn get_list<T: DeserializeOwned>(&self, path: String, fallback: &str) -> Result<Vec<T>, ApiError> {
        let body = self.execute(Method::Get, path, None, Access::Protected, fallback).await?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let listing: Option<Listing<T>> = decode(&body)?;
        Ok(listing.map(Listing::into_vec).unwrap_or_default())
    }

    async fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: String,
        body: &B,
        access: Access,
        fallback: &str,
    ) -> Result<String, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.execute(method, path, Some(body), access, fallback).await
    }

    async fn delete(&self, path: String, fallback: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, path, None, Access::Protected, fallback).await?;
        Ok(())
    }
}

/// Collection body shapes seen from the backend
#[derive(Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    Bare(Vec<T>),
    Keyed {
        #[serde(alias = "clients", alias = "projects")]
        items: Vec<T>,
    },
}

impl<T> Listing<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Bare(items) | Listing::Keyed { items } => items,
        }
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("could not decode response: {}", e);
        ApiError::Decode(e.to_string())
    })
}

/// Percent-encode one path segment
fn segment(id: &str) -> String {
    utf8_percent_encode(id, NON_ALPHANUMERIC).to_string()
}

/// Await a primary and a secondary fetch together. The primary's error
/// wins; a rejected session on either side is `Unauthorized`; any other
/// secondary failure degrades to an empty collection.
pub async fn with_secondary<P, S, FP, FS>(what: &str, primary: FP, secondary: FS) -> Result<(P, Vec<S>), ApiError>
where
    FP: Future<Output = Result<P, ApiError>>,
    FS: Future<Output = Result<Vec<S>, ApiError>>,
{
    let (primary, secondary) = futures::future::join(primary, secondary).await;
    let primary = primary?;
    let secondary = match secondary {
        Ok(items) => items,
        Err(ApiError::Unauthorized) => return Err(ApiError::Unauthorized),
        Err(e) => {
            log::warn!("failed to fetch {}, continuing without them: {}", what, e);
            Vec::new()
        }
    };
    Ok((primary, secondary))
}
