//! HTTP request handlers

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::Map;

use crisis_orchestrator::{SocialPost, StatusSnapshot};

use crate::{
    models::{TriggerRequest, TriggerResponse},
    state::AppState,
};

/// Health check
pub async fn health() -> &'static str {
    "OK"
}

/// Current pipeline status plus the last final response, if any
pub async fn status(State(state): State<AppState>) -> Json<StatusSnapshot> {
    Json(state.orchestrator.status())
}

/// Trigger a crisis cycle
///
/// Rejected with 409 while a cycle is in flight; the single-flight guard
/// inside the orchestrator backstops any race past this check.
pub async fn trigger(
    State(state): State<AppState>,
    Json(req): Json<TriggerRequest>,
) -> Result<Json<TriggerResponse>, (StatusCode, String)> {
    if state.orchestrator.cycle_state().is_in_flight() {
        return Err((
            StatusCode::CONFLICT,
            "A crisis cycle is already in flight".to_string(),
        ));
    }

    let crisis_id = format!("crisis_{}", Utc::now().timestamp());
    let post = SocialPost {
        id: crisis_id.clone(),
        author: "gateway".to_string(),
        text: req.content_or_default().to_string(),
        timestamp: Utc::now().to_rfc3339(),
        extra: Map::new(),
    };

    tracing::info!("Triggering crisis cycle {}", crisis_id);

    let orchestrator = state.orchestrator.clone();
    tokio::spawn(async move {
        if let Err(e) = orchestrator.run_cycle(&[post]).await {
            tracing::error!("Crisis cycle failed: {}", e);
        }
    });

    let monitor_orchestrator = state.orchestrator.clone();
    tokio::spawn(crate::poller::monitor(
        monitor_orchestrator,
        state.poll_interval,
        state.poll_attempts,
    ));

    Ok(Json(TriggerResponse {
        status: "triggered".to_string(),
        crisis_id: crisis_id.clone(),
        message: format!("Crisis analysis started for {}", crisis_id),
    }))
}
