//! Infrastructure Layer
//!
//! Gateway implementations.

pub mod http;
