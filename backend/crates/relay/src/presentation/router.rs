//! Relay Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::RelayConfig;
use crate::domain::gateway::BackendGateway;
use crate::infra::http::HttpBackendGateway;
use crate::presentation::handlers::{self, RelayAppState};

/// Create the relay router forwarding over HTTP.
/// Mount it where the frontend expects the proxy, e.g. `/api/proxy`.
pub fn relay_router(gateway: HttpBackendGateway, config: RelayConfig) -> Router {
    relay_router_generic(gateway, config)
}

/// Create a relay router for any gateway implementation
pub fn relay_router_generic<G>(gateway: G, config: RelayConfig) -> Router
where
    G: BackendGateway + Send + Sync + 'static,
{
    let state = RelayAppState {
        gateway: Arc::new(gateway),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", post(handlers::relay_call::<G>))
        .with_state(state)
}
