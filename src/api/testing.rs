//! Recording fake transport for tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::{ApiClient, ApiError, ApiRequest, Method, RawResponse, Transport};
use crate::session::Session;

enum Reply {
    Respond(RawResponse),
    Fail(ApiError),
}

/// Answers from a fixed route table and records every request it sees.
/// Unrouted requests get a 404.
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<Vec<(Method, String, Reply)>>,
    calls: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        let reply = Reply::Respond(RawResponse::new(status, body.to_string()));
        self.routes.lock().unwrap().push((method, path.to_string(), reply));
    }

    pub fn respond_raw(&self, method: Method, path: &str, status: u16, body: &str) {
        let reply = Reply::Respond(RawResponse::new(status, body));
        self.routes.lock().unwrap().push((method, path.to_string(), reply));
    }

    pub fn fail(&self, method: Method, path: &str, err: ApiError) {
        self.routes.lock().unwrap().push((method, path.to_string(), Reply::Fail(err)));
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, _origin: &str, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        self.calls.lock().unwrap().push(request.clone());
        let routes = self.routes.lock().unwrap();
        match routes
            .iter()
            .find(|(method, path, _)| *method == request.method && *path == request.path)
        {
            Some((_, _, Reply::Respond(response))) => Ok(response.clone()),
            Some((_, _, Reply::Fail(err))) => Err(err.clone()),
            None => Ok(RawResponse::new(404, r#"{"message":"no route"}"#)),
        }
    }
}

/// Client over `fake`, signed in with `token` when given
pub fn client_with(fake: &Arc<FakeTransport>, token: Option<&str>) -> ApiClient {
    let session = Session::in_memory();
    if let Some(token) = token {
        session.set(token);
    }
    ApiClient::new("http://backend.test", session, fake.clone())
}
