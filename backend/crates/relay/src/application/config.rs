//! Application Configuration
//!
//! Configuration for the relay.

use axum::http::HeaderName;
use kernel::paths::REGISTRATION_PATH;
use platform::headers::relay_stripped_headers;
use std::env;

use crate::domain::value_objects::BackendOrigin;
use crate::error::RelayResult;

/// Backend used when `BACKEND_ORIGIN` is not set
pub const DEFAULT_BACKEND_ORIGIN: &str = "http://localhost:8888";

/// Relay configuration
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Where every descriptor is forwarded
    pub backend_origin: BackendOrigin,
    /// Calls to this path never carry an Authorization header
    pub registration_path: String,
    /// Response headers never copied back to the caller
    pub stripped_response_headers: Vec<HeaderName>,
    /// Upper bound for an inbound descriptor body
    pub max_descriptor_bytes: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            backend_origin: BackendOrigin::parse(DEFAULT_BACKEND_ORIGIN)
                .expect("default backend origin is valid"),
            registration_path: REGISTRATION_PATH.to_string(),
            stripped_response_headers: relay_stripped_headers(),
            max_descriptor_bytes: 2 * 1024 * 1024,
        }
    }
}

impl RelayConfig {
    /// Config forwarding to the given origin
    pub fn with_origin(origin: &str) -> RelayResult<Self> {
        Ok(Self {
            backend_origin: BackendOrigin::parse(origin)?,
            ..Default::default()
        })
    }

    /// Read `BACKEND_ORIGIN` from the environment, falling back to the default
    pub fn from_env() -> RelayResult<Self> {
        match env::var("BACKEND_ORIGIN") {
            Ok(origin) => Self::with_origin(&origin),
            Err(_) => Ok(Self::default()),
        }
    }
}
