//! API DTOs (Data Transfer Objects)
//!
//! The request DTO is `kernel::CallDescriptor`; only the error envelope is
//! relay-specific.

use serde::{Deserialize, Serialize};

/// Body of every relay-internal failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
