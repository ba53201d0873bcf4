//! Header utilities
//!
//! Conversions between the descriptor's plain string map and typed
//! `HeaderMap`s, response scrubbing, and bearer-token helpers.

use axum::http::{HeaderMap, HeaderName, HeaderValue, header};

/// CORS negotiation headers set by the backend for its own origin.
/// The relay's caller is same-origin, so these would only conflict.
pub const CORS_NEGOTIATION_HEADERS: [HeaderName; 3] = [
    header::ACCESS_CONTROL_ALLOW_ORIGIN,
    header::ACCESS_CONTROL_ALLOW_METHODS,
    header::ACCESS_CONTROL_ALLOW_HEADERS,
];

/// Framing headers describing the backend's body bytes, which stop being
/// true once the body is re-serialized.
pub const FRAMING_HEADERS: [HeaderName; 4] = [
    header::CONTENT_LENGTH,
    header::TRANSFER_ENCODING,
    header::CONNECTION,
    header::CONTENT_ENCODING,
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    #[error("Invalid header name: {0}")]
    InvalidName(String),

    #[error("Invalid value for header {0}")]
    InvalidValue(String),
}

/// Build a `HeaderMap` from string pairs, later pairs overriding earlier ones
pub fn header_map_from_pairs<'a, I>(pairs: I) -> Result<HeaderMap, HeaderError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| HeaderError::InvalidName(name.to_string()))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| HeaderError::InvalidValue(name.to_string()))?;
        map.insert(name, value);
    }
    Ok(map)
}

/// Copy every header except the stripped ones, keeping repeated values
pub fn scrub_headers(source: &HeaderMap, stripped: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(source.len());
    for (name, value) in source {
        if stripped.contains(name) {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// Headers the relay never copies from a backend response
pub fn relay_stripped_headers() -> Vec<HeaderName> {
    CORS_NEGOTIATION_HEADERS
        .iter()
        .chain(FRAMING_HEADERS.iter())
        .cloned()
        .collect()
}

/// `Authorization` value for a bearer token
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Token part of a `Bearer` authorization value
pub fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    scheme.eq_ignore_ascii_case("bearer").then_some(token.trim())
}

/// Loggable prefix of a secret
pub fn redact(secret: &str) -> String {
    let prefix: String = secret.chars().take(10).collect();
    format!("{prefix}...")
}

/// Media type of a `Content-Type` header, if any
pub fn content_type(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::CONTENT_TYPE)?.to_str().ok()
}

pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    content_type(headers).is_some_and(|ct| ct.contains("application/json"))
}
