//! Handlers for overlay CRUD.
//!
//! Overlays are independent records; every field except the id is
//! freely overwritable, and field values are persisted without
//! validation (an unknown `type` string is stored as-is).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use livecast_core::error::CoreError;
use livecast_core::types::DbId;
use livecast_db::models::overlay::{CreateOverlay, UpdateOverlay};
use livecast_db::repositories::OverlayRepo;

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::serialize::stringify_ids;
use crate::state::AppState;

/// Parse a path id. A malformed id names nothing, so it is reported as
/// not-found rather than as a bad request.
fn parse_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse::<DbId>()
        .map_err(|_| AppError::Core(CoreError::not_found("Overlay", raw)))
}

/// POST /overlays
///
/// Create an overlay. The body may be omitted entirely; absent fields
/// fall back to the documented defaults.
pub async fn create_overlay(
    State(state): State<AppState>,
    body: Option<Json<CreateOverlay>>,
) -> AppResult<impl IntoResponse> {
    let input = body.map(|Json(input)| input).unwrap_or_default();
    let overlay = OverlayRepo::create(&state.pool, input).await?;

    tracing::info!(overlay_id = overlay.id, name = %overlay.name, "Overlay created");

    let data = stringify_ids(serde_json::to_value(&overlay)?);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Overlay created successfully", data)),
    ))
}

/// GET /overlays
///
/// List all overlays in insertion order.
pub async fn list_overlays(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let overlays = OverlayRepo::list(&state.pool).await?;
    let data = stringify_ids(serde_json::to_value(&overlays)?);
    Ok(Json(ApiResponse::data(data)))
}

/// GET /overlays/{id}
pub async fn get_overlay(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id)?;
    let overlay = OverlayRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Overlay", id.to_string()))?;

    let data = stringify_ids(serde_json::to_value(&overlay)?);
    Ok(Json(ApiResponse::data(data)))
}

/// PUT /overlays/{id}
///
/// Partial update: only the fields present in the body change, and
/// `updated_at` is refreshed. Returns the post-update record.
pub async fn update_overlay(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<UpdateOverlay>>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id)?;
    let input = body.map(|Json(input)| input).unwrap_or_default();

    let overlay = OverlayRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Overlay", id.to_string()))?;

    tracing::info!(overlay_id = overlay.id, "Overlay updated");

    let data = stringify_ids(serde_json::to_value(&overlay)?);
    Ok(Json(ApiResponse::with_message("Overlay updated successfully", data)))
}

/// DELETE /overlays/{id}
pub async fn delete_overlay(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id)?;
    let deleted = OverlayRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(CoreError::not_found("Overlay", id.to_string()).into());
    }

    tracing::info!(overlay_id = id, "Overlay deleted");

    Ok(Json(ApiResponse::message_only("Overlay deleted successfully")))
}
