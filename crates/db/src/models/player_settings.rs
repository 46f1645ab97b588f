//! Playback settings model and DTO.

use livecast_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The payload columns of the `player_settings` singleton row.
///
/// The sentinel primary key is intentionally not part of the model; it
/// never leaves the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PlayerSettings {
    pub rtsp_url: String,
    pub volume: f64,
    pub autoplay: bool,
    pub updated_at: Timestamp,
}

/// DTO for saving settings. Saving replaces the whole record: absent
/// fields are reset to their defaults, not kept from the stored row.
#[derive(Debug, Default, Deserialize)]
pub struct SaveSettings {
    pub rtsp_url: Option<String>,
    pub volume: Option<f64>,
    pub autoplay: Option<bool>,
}
