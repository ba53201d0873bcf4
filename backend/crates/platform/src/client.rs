//! Client identification utilities
//!
//! Identifies the caller of the relay for request logs. The relay holds no
//! per-client state, so nothing here is used for access decisions.

use axum::http::{HeaderMap, header};
use std::net::IpAddr;

/// Who sent a relay request, as far as headers tell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    /// Client IP address (from X-Forwarded-For or direct connection)
    pub ip: Option<IpAddr>,
    /// User-Agent string, if sent
    pub user_agent: Option<String>,
}

impl ClientInfo {
    /// IP for log fields, `"-"` when unknown
    pub fn ip_display(&self) -> String {
        self.ip
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Collect client details from request headers and the peer address
pub fn client_info(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> ClientInfo {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    ClientInfo {
        ip: extract_client_ip(headers, direct_ip),
        user_agent,
    }
}

/// Extract client IP address from headers
///
/// Checks X-Forwarded-For first (the relay usually sits behind the web
/// frontend's server), then falls back to the direct connection IP.
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|xff| xff.split(',').next())
        .and_then(|first| first.trim().parse::<IpAddr>().ok())
        .or(direct_ip)
}
