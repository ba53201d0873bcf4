//! Client Configuration

use std::env;

/// Relay endpoint used when `RELAY_URL` is not set
pub const DEFAULT_RELAY_URL: &str = "http://localhost:3000/api/proxy";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute URL of the relay endpoint
    pub relay_url: String,
    /// Where `logout` sends the view
    pub login_path: String,
    /// Where a 401 sends the view
    pub login_redirect: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            relay_url: DEFAULT_RELAY_URL.to_string(),
            login_path: "/login".to_string(),
            login_redirect: "/login?reason=auth_failed".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_relay_url(relay_url: impl Into<String>) -> Self {
        Self {
            relay_url: relay_url.into(),
            ..Default::default()
        }
    }

    /// Read `RELAY_URL` from the environment, falling back to the default
    pub fn from_env() -> Self {
        match env::var("RELAY_URL") {
            Ok(url) if !url.trim().is_empty() => Self::with_relay_url(url.trim()),
            _ => Self::default(),
        }
    }
}
