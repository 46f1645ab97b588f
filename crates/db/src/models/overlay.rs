//! Overlay model and DTOs.

use livecast_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `overlays` table.
///
/// `kind` travels as `type` on the wire, matching what the player UI
/// sends. `position`, `size`, and `style` are free-form JSON persisted
/// exactly as received.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Overlay {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub position: serde_json::Value,
    pub size: serde_json::Value,
    pub style: serde_json::Value,
    pub visible: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new overlay. Every field is optional; absent
/// fields fall back to the defaults in `livecast_core::overlay`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateOverlay {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub content: Option<String>,
    pub position: Option<serde_json::Value>,
    pub size: Option<serde_json::Value>,
    pub style: Option<serde_json::Value>,
    pub visible: Option<bool>,
}

/// DTO for partially updating an overlay. Only provided fields change.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateOverlay {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub content: Option<String>,
    pub position: Option<serde_json::Value>,
    pub size: Option<serde_json::Value>,
    pub style: Option<serde_json::Value>,
    pub visible: Option<bool>,
}
