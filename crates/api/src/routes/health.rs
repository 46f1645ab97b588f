use axum::{routing::get, Json, Router};
use chrono::Utc;
use livecast_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
    /// Time the probe was answered, ISO-8601.
    pub timestamp: Timestamp,
}

/// GET /health -- liveness probe.
///
/// Deliberately touches nothing but the clock, so it succeeds even when
/// the database is unreachable.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Server is running",
        timestamp: Utc::now(),
    })
}

/// Mount health check routes, merged into `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
