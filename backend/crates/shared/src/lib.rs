//! Shared Kernel - Vocabulary shared by the relay and its clients
//!
//! This crate contains the "smallest core" that both sides of the relay agree on:
//! - Common error types and result aliases
//! - The Call Descriptor wire shape (`{url, method, headers, body}`)
//! - Well-known backend paths that change relay/client behavior
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning on both sides of the wire.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod call;
pub mod paths;

pub use call::{CallDescriptor, CallMethod};
