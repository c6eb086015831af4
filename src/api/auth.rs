//! Auth Endpoints

use serde::Deserialize;

use super::{decode, Access, ApiClient, ApiError, Method};
use crate::models::{LoginRequest, LoginResponse, SignupRequest, UserProfile};

/// `/api/auth/me` answers either `{user: {...}}` or the bare profile
#[derive(Deserialize)]
#[serde(untagged)]
enum MeResponse {
    Wrapped { user: UserProfile },
    Flat(UserProfile),
}

impl ApiClient {
    /// Exchange credentials for a token and start the session with it
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let body = self
            .send_json(Method::Post, "/api/auth/login".into(), credentials, Access::Public, "Login failed")
            .await?;
        let response: LoginResponse = decode(&body)?;
        self.session.set(&response.token);
        log::info!("signed in as {}", credentials.email);
        Ok(response)
    }

    /// Register an account; the user signs in separately afterwards
    pub async fn signup(&self, registration: &SignupRequest) -> Result<(), ApiError> {
        self.send_json(Method::Post, "/api/auth/signup".into(), registration, Access::Public, "Signup failed")
            .await?;
        log::info!("registered {}", registration.email);
        Ok(())
    }

    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        let response: MeResponse = self.get_json("/api/auth/me".into(), "Failed to fetch user data").await?;
        Ok(match response {
            MeResponse::Wrapped { user } | MeResponse::Flat(user) => user,
        })
    }

    /// End the session locally; the backend keeps no session state
    pub fn logout(&self) {
        self.session.clear();
        log::info!("signed out");
    }
}
