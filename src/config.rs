//! Application Configuration
//!
//! Resolved once at startup from build-time environment with defaults.

use log::LevelFilter;

/// Local storage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Runtime settings shared through context
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin of the REST backend, without trailing slash
    pub api_base: String,
    pub log_level: LevelFilter,
    /// Delay before leaving a form after a successful save
    pub redirect_delay_ms: u32,
    /// Delay before entering the dashboard after login
    pub login_redirect_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: default_level(),
            redirect_delay_ms: 2000,
            login_redirect_delay_ms: 1500,
        }
    }
}

impl AppConfig {
    /// Read `PROJECTDESK_API_BASE` and `PROJECTDESK_LOG` as baked in at compile time
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("PROJECTDESK_API_BASE"), option_env!("PROJECTDESK_LOG"))
    }

    fn resolve(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base = base.trim_end_matches('/').to_string();
        }

        // Unknown level names fall back to the default rather than aborting startup
        if let Some(level) = log_level.and_then(|l| console_logger::parse_level(l).ok()) {
            config.log_level = level;
        }

        config
    }
}

fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::resolve(None, None);
        assert_eq!(config.api_base, "http://localhost:5000");
        assert_eq!(config.redirect_delay_ms, 2000);
        assert_eq!(config.login_redirect_delay_ms, 1500);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::resolve(Some("https://api.example.com/"), Some("warn"));
        assert_eq!(config.api_base, "https://api.example.com");
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::resolve(Some("  "), Some("chatty"));
        assert_eq!(config.api_base, "http://localhost:5000");
        assert_eq!(config.log_level, default_level());
    }
}
