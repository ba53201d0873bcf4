//! Relay Error Types
//!
//! Every failure inside the relay ends up here and is rendered as the
//! `500 {message, error}` envelope. Nothing escapes the handler as a panic
//! or an extractor rejection.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::headers::HeaderError;
use thiserror::Error;

use crate::presentation::dto::ErrorEnvelope;

/// Relay result type alias
pub type RelayResult<T> = Result<T, RelayError>;

/// Message shown to the caller for any relay-internal failure
pub const RELAY_FAILURE_MESSAGE: &str = "An error occurred while processing the request";

#[derive(Debug, Error)]
pub enum RelayError {
    /// Request body was not a valid Call Descriptor
    #[error("Invalid call descriptor: {0}")]
    InvalidDescriptor(#[from] serde_json::Error),

    /// Request body could not be read
    #[error("Failed to read request body: {0}")]
    Body(String),

    /// `url` would leave the configured backend origin
    #[error("Invalid backend path: {0}")]
    InvalidPath(String),

    /// Configured backend origin is unusable
    #[error("Invalid backend origin: {0}")]
    InvalidOrigin(String),

    /// A descriptor header could not be forwarded
    #[error("Invalid header: {0}")]
    InvalidHeader(#[from] HeaderError),

    /// Backend unreachable or response unreadable
    #[error("Backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RelayError {
    /// Status code of the envelope. Always 500: the caller cannot tell a
    /// relay fault from a backend fault, and the client treats both alike.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Classification for hosts that embed the relay
    pub fn kind(&self) -> ErrorKind {
        match self {
            RelayError::InvalidDescriptor(_)
            | RelayError::Body(_)
            | RelayError::InvalidPath(_)
            | RelayError::InvalidHeader(_) => ErrorKind::BadRequest,
            RelayError::Upstream(_) => ErrorKind::BadGateway,
            RelayError::InvalidOrigin(_) | RelayError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            message: RELAY_FAILURE_MESSAGE.to_string(),
            error: Some(self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            RelayError::Upstream(e) => {
                tracing::error!(error = %e, "Relay upstream error");
            }
            RelayError::Internal(msg) | RelayError::InvalidOrigin(msg) => {
                tracing::error!(message = %msg, "Relay internal error");
            }
            RelayError::InvalidPath(path) => {
                tracing::warn!(path = %path, "Rejected path outside backend origin");
            }
            _ => {
                tracing::debug!(error = %self, "Relay error");
            }
        }
    }
}

impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        AppError::new(err.kind(), err.to_string()).with_source(err)
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        self.log();
        (self.status_code(), Json(self.envelope())).into_response()
    }
}
