//! Outbound HTTP client
//!
//! One `reqwest::Client` per process, shared by the relay (towards the
//! banking backend) and by the client transport (towards the relay).
//! No timeout is configured: calls wait as long as the transport allows.

use std::time::Duration;

/// Outbound client settings
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User-Agent sent on every outbound request
    pub user_agent: String,
    /// TCP connect timeout; the request itself is never timed out
    pub connect_timeout: Option<Duration>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("bank-relay/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to build HTTP client: {0}")]
pub struct HttpClientError(#[from] reqwest::Error);

/// Build the shared outbound client
pub fn build_http_client(config: &HttpClientConfig) -> Result<reqwest::Client, HttpClientError> {
    let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
    if let Some(timeout) = config.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    let client = builder.build()?;
    tracing::debug!(user_agent = %config.user_agent, "Outbound HTTP client ready");
    Ok(client)
}
