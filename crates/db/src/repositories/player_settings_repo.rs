//! Repository for the `player_settings` singleton table.
//!
//! The row is keyed by a fixed sentinel id, so `ON CONFLICT (id)` gives
//! replace-or-create semantics: saving always targets the one row and
//! can never create a second.

use livecast_core::settings as defaults;
use sqlx::PgPool;

use crate::models::player_settings::{PlayerSettings, SaveSettings};

/// Payload column list; the sentinel id is never selected.
const COLUMNS: &str = "rtsp_url, volume, autoplay, updated_at";

/// Provides data access for the playback settings singleton.
pub struct PlayerSettingsRepo;

impl PlayerSettingsRepo {
    /// Get the settings record.
    ///
    /// Returns `None` if settings have never been saved.
    pub async fn get(pool: &PgPool) -> Result<Option<PlayerSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM player_settings WHERE id = 1");
        sqlx::query_as::<_, PlayerSettings>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Replace-or-create the settings record.
    ///
    /// Every field is written: absent DTO fields are reset to their
    /// defaults rather than kept from the stored row, and `updated_at`
    /// is refreshed.
    pub async fn save(pool: &PgPool, input: SaveSettings) -> Result<PlayerSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO player_settings (id, rtsp_url, volume, autoplay, updated_at)
             VALUES (1, $1, $2, $3, NOW())
             ON CONFLICT (id) DO UPDATE SET
                rtsp_url = EXCLUDED.rtsp_url,
                volume = EXCLUDED.volume,
                autoplay = EXCLUDED.autoplay,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlayerSettings>(&query)
            .bind(
                input
                    .rtsp_url
                    .unwrap_or_else(|| defaults::DEFAULT_RTSP_URL.into()),
            )
            .bind(input.volume.unwrap_or(defaults::DEFAULT_VOLUME))
            .bind(input.autoplay.unwrap_or(defaults::DEFAULT_AUTOPLAY))
            .fetch_one(pool)
            .await
    }

    /// Number of persisted settings rows. The singleton constraint means
    /// this is always 0 or 1; used by tests to assert it.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM player_settings")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
