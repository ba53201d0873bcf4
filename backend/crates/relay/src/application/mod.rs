//! Application Layer - Use Cases
//!
//! Orchestrates domain rules and the backend gateway.

pub mod config;
pub mod forward_call;

pub use forward_call::ForwardCallUseCase;
