//! API Server Entry Point
//!
//! Hosts the relay endpoint at `POST /api/proxy`.
//! Uses `anyhow` for startup errors; request-level errors are
//! `kernel::error::AppError` or the relay's own envelope.

use axum::{
    Json, Router, http,
    http::{Method, header},
    routing::get,
};
use kernel::error::app_error::AppError;
use platform::http_client::HttpClientConfig;
use relay::{HttpBackendGateway, RelayConfig, relay_router};
use serde_json::{Value, json};
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,relay=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let relay_config = RelayConfig::from_env()?;
    tracing::info!(backend_origin = %relay_config.backend_origin, "Relay configured");

    let gateway = HttpBackendGateway::from_config(&HttpClientConfig::default())?;

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let app = build_app(gateway, relay_config, &frontend_origins);

    // Start server
    let addr: SocketAddr = env::var("LISTEN_ADDR")
        .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
        .parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn build_app(gateway: HttpBackendGateway, relay_config: RelayConfig, frontend_origins: &str) -> Router {
    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    Router::new()
        .route("/health", get(health))
        .nest("/api/proxy", relay_router(gateway, relay_config))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found() -> AppError {
    AppError::not_found("Route not found")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
