//! reqwest-backed Relay Transport

use kernel::CallDescriptor;
use platform::http_client::{HttpClientConfig, build_http_client};
use reqwest::Url;

use crate::domain::transport::{RelayReply, RelayTransport};
use crate::error::{ClientError, ClientResult};

/// POSTs descriptors to the relay endpoint as JSON
#[derive(Debug, Clone)]
pub struct HttpRelayTransport {
    client: reqwest::Client,
    relay_url: Url,
}

impl HttpRelayTransport {
    pub fn new(client: reqwest::Client, relay_url: Url) -> Self {
        Self { client, relay_url }
    }

    /// Transport with a freshly built client
    pub fn connect(relay_url: &str) -> ClientResult<Self> {
        let relay_url = Url::parse(relay_url)
            .map_err(|e| ClientError::InvalidInput(format!("Invalid relay URL {relay_url}: {e}")))?;
        let client = build_http_client(&HttpClientConfig::default())
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(Self::new(client, relay_url))
    }

    pub fn relay_url(&self) -> &Url {
        &self.relay_url
    }
}

impl RelayTransport for HttpRelayTransport {
    async fn send(&self, descriptor: &CallDescriptor) -> ClientResult<RelayReply> {
        let response = self
            .client
            .post(self.relay_url.clone())
            .json(descriptor)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RelayReply { status, body })
    }
}
