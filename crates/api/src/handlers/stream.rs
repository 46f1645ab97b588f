//! Handler for the stream status placeholder.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::response::ApiResponse;
use crate::state::AppState;

/// Stream status payload.
#[derive(Debug, Serialize)]
pub struct StreamStatus {
    pub active: bool,
    /// `null` until a pipeline sets a source.
    pub rtsp_url: Option<String>,
}

/// GET /stream/status
///
/// Reports the in-memory stream state. Infallible: no store access.
pub async fn stream_status(State(state): State<AppState>) -> Json<ApiResponse<StreamStatus>> {
    let status = StreamStatus {
        active: state.stream.is_active(),
        rtsp_url: state.stream.rtsp_url().await,
    };
    Json(ApiResponse::data(status))
}
