//! Gateway Trait
//!
//! The port through which resolved calls reach the banking backend.
//! Implementation is in the infra layer.

use crate::domain::entities::{BackendReply, OutboundRequest};
use crate::error::RelayResult;

/// Backend gateway trait
#[trait_variant::make(BackendGateway: Send)]
pub trait LocalBackendGateway {
    /// Issue one request and read the whole response body as text
    async fn send(&self, request: OutboundRequest) -> RelayResult<BackendReply>;
}
