//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations for the relay and its clients:
//! - Header scrubbing and bearer-token formatting
//! - Client address extraction for request logs
//! - The shared outbound HTTP client

pub mod client;
pub mod headers;
pub mod http_client;
