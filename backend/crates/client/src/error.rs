//! Client Error Types
//!
//! Every way a wrapped backend call can end other than `Success`. Messages
//! are human-readable so a view can display `to_string()` directly.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Client result type alias
pub type ClientResult<T> = Result<T, ClientError>;

/// Shown when the backend failed without saying why
pub const FALLBACK_MESSAGE: &str = "An error occurred while processing the request";

#[derive(Debug, Error)]
pub enum ClientError {
    /// The relay could not be reached
    #[error("Failed to reach the server: {0}")]
    Transport(String),

    /// The relay answered with something that is not JSON
    #[error("Invalid server response")]
    InvalidResponse,

    /// The backend rejected the session; it has been cleared and the view redirected
    #[error("Unauthorized")]
    Unauthorized,

    /// Any other non-success status, with the backend's message or the fallback
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The payload did not match the expected contract
    #[error("Unexpected response shape: {0}")]
    Contract(#[source] serde_json::Error),

    /// The call was aborted through its cancellation token
    #[error("Request cancelled")]
    Cancelled,

    /// Session storage could not be read or written
    #[error("Session storage error: {0}")]
    Storage(String),

    /// Login succeeded without a token in the reply
    #[error("Server did not return an auth token")]
    MissingToken,

    /// Caller-side input rejected before any call was made
    #[error("{0}")]
    InvalidInput(String),
}

impl ClientError {
    /// Status the backend answered with, when the failure came from it
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Backend { status, .. } => Some(*status),
            ClientError::Unauthorized => Some(401),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Terminal for the whole view, not just for one sub-call
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClientError::Unauthorized | ClientError::Cancelled)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Transport(_) | ClientError::InvalidResponse | ClientError::MissingToken => {
                ErrorKind::BadGateway
            }
            ClientError::Unauthorized => ErrorKind::Unauthorized,
            ClientError::Backend { status, .. } => {
                ErrorKind::from_status(*status).unwrap_or(ErrorKind::BadGateway)
            }
            ClientError::Contract(_) => ErrorKind::UnprocessableEntity,
            ClientError::Cancelled => ErrorKind::RequestTimeout,
            ClientError::Storage(_) => ErrorKind::InternalServerError,
            ClientError::InvalidInput(_) => ErrorKind::BadRequest,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Storage(err.to_string())
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            ClientError::Unauthorized => {
                AppError::new(kind, message).with_action("Please sign in again")
            }
            ClientError::Backend { status, .. } => AppError::from_status(status, message),
            other => AppError::new(kind, message).with_source(other),
        }
    }
}
