//! Domain Entities

use axum::http::{HeaderMap, Method, StatusCode};
use reqwest::Url;
use serde_json::Value;

/// A fully resolved call, ready for the backend
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    /// JSON-serialized descriptor body, absent when the descriptor had none
    pub body: Option<Vec<u8>>,
}

/// What the backend sent back, body still as text
#[derive(Debug, Clone)]
pub struct BackendReply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// What the relay returns to its caller
#[derive(Debug, Clone)]
pub struct RelayedResponse {
    /// Backend's original status
    pub status: StatusCode,
    /// Backend headers minus the scrubbed ones
    pub headers: HeaderMap,
    /// Parsed backend JSON or a `{message}` wrapper around raw text
    pub body: Value,
}
