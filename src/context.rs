//! Application Context
//!
//! Shared services provided via Leptos Context API.

use std::time::Duration;

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;

/// Backend handle and settings, provided once by `App`
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<ApiClient>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(api: ApiClient, config: AppConfig) -> Self {
        Self {
            api: StoredValue::new(api),
            config: StoredValue::new(config),
        }
    }

    /// Clone of the API client, for moving into a spawned future
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn is_signed_in(&self) -> bool {
        self.api.with_value(|api| api.session().is_authenticated())
    }

    /// Pause after a successful form save before navigating away
    pub fn redirect_delay(&self) -> Duration {
        self.config.with_value(|c| Duration::from_millis(c.redirect_delay_ms.into()))
    }

    pub fn login_redirect_delay(&self) -> Duration {
        self.config
            .with_value(|c| Duration::from_millis(c.login_redirect_delay_ms.into()))
    }
}

/// Get the app context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
