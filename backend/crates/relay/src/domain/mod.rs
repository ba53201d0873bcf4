//! Domain Layer
//!
//! The relay's rules, independent of axum and reqwest:
//! - `value_objects` - the backend origin and path resolution
//! - `entities` - outbound request and relayed response shapes
//! - `services` - header preparation and body interpretation
//! - `gateway` - the port through which calls reach the backend

pub mod entities;
pub mod gateway;
pub mod services;
pub mod value_objects;
