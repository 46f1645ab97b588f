//! Repository for the `overlays` table.

use livecast_core::overlay as defaults;
use livecast_core::types::DbId;
use sqlx::PgPool;

use crate::models::overlay::{CreateOverlay, Overlay, UpdateOverlay};

/// Column list for overlays queries.
const COLUMNS: &str = "id, name, kind, content, position, size, style, \
    visible, created_at, updated_at";

/// Provides CRUD operations for overlays.
pub struct OverlayRepo;

impl OverlayRepo {
    /// Create a new overlay, filling in defaults for absent fields, and
    /// return the created row.
    pub async fn create(pool: &PgPool, input: CreateOverlay) -> Result<Overlay, sqlx::Error> {
        let query = format!(
            "INSERT INTO overlays (name, kind, content, position, size, style, visible)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Overlay>(&query)
            .bind(input.name.unwrap_or_else(|| defaults::DEFAULT_NAME.into()))
            .bind(input.kind.unwrap_or_else(|| defaults::DEFAULT_KIND.into()))
            .bind(input.content.unwrap_or_default())
            .bind(input.position.unwrap_or_else(defaults::default_position))
            .bind(input.size.unwrap_or_else(defaults::default_size))
            .bind(input.style.unwrap_or_else(defaults::default_style))
            .bind(input.visible.unwrap_or(true))
            .fetch_one(pool)
            .await
    }

    /// List every overlay in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Overlay>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM overlays ORDER BY id ASC");
        sqlx::query_as::<_, Overlay>(&query).fetch_all(pool).await
    }

    /// Find an overlay by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Overlay>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM overlays WHERE id = $1");
        sqlx::query_as::<_, Overlay>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update an overlay: only provided fields change, and
    /// `updated_at` is refreshed. Returns `None` when no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOverlay,
    ) -> Result<Option<Overlay>, sqlx::Error> {
        let query = format!(
            "UPDATE overlays SET
                name = COALESCE($1, name),
                kind = COALESCE($2, kind),
                content = COALESCE($3, content),
                position = COALESCE($4, position),
                size = COALESCE($5, size),
                style = COALESCE($6, style),
                visible = COALESCE($7, visible),
                updated_at = NOW()
             WHERE id = $8
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Overlay>(&query)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(&input.content)
            .bind(&input.position)
            .bind(&input.size)
            .bind(&input.style)
            .bind(input.visible)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an overlay by its ID. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM overlays WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
