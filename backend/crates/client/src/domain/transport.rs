//! Relay Transport Trait
//!
//! How a Call Descriptor reaches the relay endpoint. Implementation is in
//! the infra layer.

use kernel::CallDescriptor;

use crate::error::ClientResult;

/// Raw relay answer: status plus body text, not yet interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReply {
    pub status: u16,
    pub body: String,
}

impl RelayReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Relay transport trait
#[trait_variant::make(RelayTransport: Send)]
pub trait LocalRelayTransport {
    /// POST one descriptor to the relay and read the whole body as text
    async fn send(&self, descriptor: &CallDescriptor) -> ClientResult<RelayReply>;
}
