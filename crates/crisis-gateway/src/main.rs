//! Crisis Gateway - REST API in front of the crisis pipeline
//!
//! Exposes trigger and status endpoints for operators and dashboards, and
//! monitors each triggered cycle until the final response lands.

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

use crisis_comms::HttpCaller;
use crisis_core::{config::load_config_or_default, logging};
use crisis_orchestrator::{AgentEndpoints, CrisisOrchestrator, PipelineConfig};

mod handlers;
mod models;
mod poller;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path =
        std::env::var("CRISIS_CONFIG").unwrap_or_else(|_| "config/crisis.toml".to_string());
    let config = load_config_or_default(&config_path);

    logging::init_logging((&config.logging).into());

    let orchestrator = CrisisOrchestrator::new(
        Arc::new(HttpCaller::new()),
        AgentEndpoints::from_config(&config.agents),
        PipelineConfig::from(&config),
    );

    let state = AppState::new(
        orchestrator,
        Duration::from_secs(config.gateway.poll_interval_secs),
        config.gateway.poll_attempts,
    );

    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/crisis/status", get(handlers::status))
        .route("/api/crisis/trigger", post(handlers::trigger))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.gateway.port));
    tracing::info!("Crisis gateway listening on http://{}", addr);
    tracing::info!("  GET  /health - Health check");
    tracing::info!("  GET  /api/crisis/status - Pipeline status and final response");
    tracing::info!("  POST /api/crisis/trigger - Start a crisis cycle");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
