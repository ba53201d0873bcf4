//! Presentation Layer
//!
//! HTTP handler, router and DTOs for the relay endpoint.

pub mod dto;
pub mod handlers;
pub mod router;
