//! Forward Call Use Case

use kernel::CallDescriptor;
use platform::headers::{content_type, is_json_content_type, scrub_headers};
use std::sync::Arc;

use crate::application::config::RelayConfig;
use crate::domain::entities::{OutboundRequest, RelayedResponse};
use crate::domain::gateway::BackendGateway;
use crate::domain::services::{interpret_body, outbound_headers, to_http_method};
use crate::error::RelayResult;

/// Forward one Call Descriptor to the backend and shape the reply
pub struct ForwardCallUseCase<G>
where
    G: BackendGateway,
{
    gateway: Arc<G>,
    config: Arc<RelayConfig>,
}

impl<G> ForwardCallUseCase<G>
where
    G: BackendGateway,
{
    pub fn new(gateway: Arc<G>, config: Arc<RelayConfig>) -> Self {
        Self { gateway, config }
    }

    pub async fn execute(&self, descriptor: CallDescriptor) -> RelayResult<RelayedResponse> {
        tracing::debug!(
            url = %descriptor.url,
            method = %descriptor.method,
            has_auth_header = descriptor.has_authorization(),
            body_keys = ?descriptor.body_keys(),
            "Relay request"
        );

        let url = self.config.backend_origin.resolve(&descriptor.url)?;

        let headers = outbound_headers(
            &descriptor.url,
            descriptor
                .headers
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
            &self.config.registration_path,
        )?;

        let body = descriptor.body.as_ref().map(serde_json::to_vec).transpose()?;

        let request = OutboundRequest {
            method: to_http_method(descriptor.method),
            url,
            headers,
            body,
        };

        let reply = self.gateway.send(request).await?;

        tracing::debug!(
            url = %descriptor.url,
            status = reply.status.as_u16(),
            content_type = content_type(&reply.headers).unwrap_or("-"),
            body_prefix = %reply.body.chars().take(100).collect::<String>(),
            "Relay response"
        );

        let body = interpret_body(&reply.body, is_json_content_type(&reply.headers));
        let headers = scrub_headers(&reply.headers, &self.config.stripped_response_headers);

        Ok(RelayedResponse {
            status: reply.status,
            headers,
            body,
        })
    }
}
