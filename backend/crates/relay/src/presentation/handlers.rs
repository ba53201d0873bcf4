//! HTTP Handlers

use axum::Json;
use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::{Request, StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::CallDescriptor;
use platform::client::client_info;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::application::ForwardCallUseCase;
use crate::application::config::RelayConfig;
use crate::domain::entities::RelayedResponse;
use crate::domain::gateway::BackendGateway;
use crate::error::{RelayError, RelayResult};

/// Shared state for the relay handler
pub struct RelayAppState<G>
where
    G: BackendGateway + Send + Sync + 'static,
{
    pub gateway: Arc<G>,
    pub config: Arc<RelayConfig>,
}

impl<G> Clone for RelayAppState<G>
where
    G: BackendGateway + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            config: self.config.clone(),
        }
    }
}

/// POST /api/proxy
///
/// The body is read raw and parsed here, so a malformed descriptor produces
/// the relay's 500 envelope instead of an extractor rejection.
pub async fn relay_call<G>(
    State(state): State<RelayAppState<G>>,
    req: Request<Body>,
) -> RelayResult<Response>
where
    G: BackendGateway + Send + Sync + 'static,
{
    let direct_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());
    let client = client_info(req.headers(), direct_ip);

    let bytes = axum::body::to_bytes(req.into_body(), state.config.max_descriptor_bytes)
        .await
        .map_err(|e| RelayError::Body(e.to_string()))?;
    let descriptor: CallDescriptor = serde_json::from_slice(&bytes)?;

    tracing::debug!(
        client_ip = %client.ip_display(),
        user_agent = client.user_agent.as_deref().unwrap_or("-"),
        url = %descriptor.url,
        "Relay call received"
    );

    let use_case = ForwardCallUseCase::new(state.gateway.clone(), state.config.clone());
    let relayed = use_case.execute(descriptor).await?;

    Ok(render(relayed))
}

/// Backend status and scrubbed headers around the JSON body
fn render(relayed: RelayedResponse) -> Response {
    let mut response = if body_forbidden(relayed.status) {
        relayed.status.into_response()
    } else {
        (relayed.status, Json(relayed.body)).into_response()
    };

    for (name, value) in relayed.headers.iter() {
        // The relayed body is always JSON, whatever the backend declared
        if name == header::CONTENT_TYPE {
            continue;
        }
        response.headers_mut().append(name.clone(), value.clone());
    }
    response
}

fn body_forbidden(status: StatusCode) -> bool {
    status.is_informational() || status == StatusCode::NO_CONTENT || status == StatusCode::NOT_MODIFIED
}
