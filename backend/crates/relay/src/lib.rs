//! Relay Endpoint Module
//!
//! A single stateless handler that forwards JSON-described calls to one
//! fixed backend origin and hands the backend's answer back, so browser
//! views never talk cross-origin.
//!
//! Clean Architecture structure:
//! - `domain/` - Origin resolution, header/body rules, gateway trait
//! - `application/` - Configuration and the forward-call use case
//! - `infra/` - reqwest gateway
//! - `presentation/` - HTTP handler, router, DTOs
//!
//! ## Relay Rules
//! - The caller supplies a backend-relative path only; the origin is configuration
//! - Registration calls never carry an Authorization header
//! - Backend status is mirrored; CORS negotiation headers are dropped
//! - Non-JSON bodies come back as `{message}`; relay faults as `500 {message, error}`
//! - No retries, no queueing, no state

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::RelayConfig;
pub use domain::value_objects::BackendOrigin;
pub use error::{RelayError, RelayResult};
pub use infra::http::HttpBackendGateway;
pub use presentation::router::{relay_router, relay_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
