//! Domain Services
//!
//! Pure rules applied to each relayed call.

use axum::http::{HeaderMap, HeaderValue, Method, header};
use kernel::CallMethod;
use platform::headers::header_map_from_pairs;
use serde_json::{Value, json};

use crate::error::RelayResult;

/// Error attached when the backend claims JSON but sends something else
pub const JSON_PARSE_ERROR: &str = "Error parsing JSON response";

pub fn to_http_method(method: CallMethod) -> Method {
    match method {
        CallMethod::Get => Method::GET,
        CallMethod::Post => Method::POST,
        CallMethod::Put => Method::PUT,
        CallMethod::Delete => Method::DELETE,
    }
}

/// Outbound headers for a descriptor
///
/// Starts from `Content-Type: application/json`, lets the descriptor's own
/// headers override it, and removes `Authorization` entirely when the call
/// targets the registration path.
pub fn outbound_headers<'a, I>(
    url: &str,
    headers: I,
    registration_path: &str,
) -> RelayResult<HeaderMap>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut map = HeaderMap::new();
    map.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    map.extend(header_map_from_pairs(headers)?);

    if url == registration_path && map.remove(header::AUTHORIZATION).is_some() {
        tracing::debug!(url = %url, "Stripped Authorization header from registration call");
    }
    Ok(map)
}

/// Turn the backend's body text into the JSON the relay returns
///
/// JSON is passed through as parsed. Anything else becomes
/// `{"message": text}`; if the backend declared JSON and lied, the wrapper
/// also carries `error`.
pub fn interpret_body(text: &str, declared_json: bool) -> Value {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(e) if declared_json => {
            tracing::warn!(error = %e, "Backend declared JSON but body did not parse");
            json!({ "message": text, "error": JSON_PARSE_ERROR })
        }
        Err(_) => json!({ "message": text }),
    }
}
