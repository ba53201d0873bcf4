//! reqwest-backed Backend Gateway

use platform::http_client::{HttpClientConfig, build_http_client};

use crate::domain::entities::{BackendReply, OutboundRequest};
use crate::domain::gateway::BackendGateway;
use crate::error::{RelayError, RelayResult};

/// Gateway that forwards over HTTP with a shared `reqwest::Client`
#[derive(Clone)]
pub struct HttpBackendGateway {
    client: reqwest::Client,
}

impl HttpBackendGateway {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Gateway with a freshly built client
    pub fn from_config(config: &HttpClientConfig) -> RelayResult<Self> {
        let client = build_http_client(config).map_err(|e| RelayError::Internal(e.to_string()))?;
        Ok(Self::new(client))
    }
}

impl BackendGateway for HttpBackendGateway {
    async fn send(&self, request: OutboundRequest) -> RelayResult<BackendReply> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        Ok(BackendReply {
            status,
            headers,
            body,
        })
    }
}
