//! Handlers for the playback settings singleton.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use livecast_core::settings as defaults;
use livecast_db::models::player_settings::SaveSettings;
use livecast_db::repositories::PlayerSettingsRepo;

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::serialize::stringify_ids;
use crate::state::AppState;

/// POST /settings
///
/// Replace-or-create the settings record. Absent fields are reset to
/// their defaults, never kept from the stored row.
pub async fn save_settings(
    State(state): State<AppState>,
    body: Option<Json<SaveSettings>>,
) -> AppResult<impl IntoResponse> {
    let input = body.map(|Json(input)| input).unwrap_or_default();
    let settings = PlayerSettingsRepo::save(&state.pool, input).await?;

    tracing::info!(
        rtsp_url = %settings.rtsp_url,
        volume = settings.volume,
        autoplay = settings.autoplay,
        "Playback settings saved"
    );

    let data = serde_json::to_value(&settings)?;
    Ok(Json(ApiResponse::with_message("Settings saved successfully", data)))
}

/// GET /settings
///
/// The stored record, or the synthesized defaults if nothing has been
/// saved yet. The default record is not persisted by reading it.
pub async fn get_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let data = match PlayerSettingsRepo::get(&state.pool).await? {
        Some(settings) => stringify_ids(serde_json::to_value(&settings)?),
        None => defaults::default_record(),
    };
    Ok(Json(ApiResponse::data(data)))
}
