use axum::extract::State;
use axum::Json;
use chrono::Utc;
use flicks_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub success: bool,
    /// Overall service status.
    pub status: &'static str,
    /// Seconds since the process started.
    pub uptime: f64,
    /// Current server time.
    pub timestamp: Timestamp,
}

/// GET /health -- process liveness and uptime. Does not touch the store.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        status: "healthy",
        uptime: state.started_at.elapsed().as_secs_f64(),
        timestamp: Utc::now(),
    })
}
