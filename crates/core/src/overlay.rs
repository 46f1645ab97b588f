//! Default values for overlay records.
//!
//! An overlay may be created from an empty request body; every field
//! falls back to the defaults defined here. The `kind` field is an
//! unconstrained string ("text" and "image" are the known values, but
//! anything the client sends is persisted as-is).

use serde_json::{json, Value};

/// Display label used when the client omits `name`.
pub const DEFAULT_NAME: &str = "Untitled Overlay";

/// Overlay kind used when the client omits `type`.
pub const DEFAULT_KIND: &str = "text";

/// Default on-screen position, in player coordinates.
pub fn default_position() -> Value {
    json!({ "x": 50, "y": 50 })
}

/// Default overlay dimensions.
pub fn default_size() -> Value {
    json!({ "width": 200, "height": 50 })
}

/// Default style record applied to new overlays.
pub fn default_style() -> Value {
    json!({
        "fontSize": "16px",
        "color": "#FFFFFF",
        "backgroundColor": "rgba(0, 0, 0, 0.5)",
        "fontWeight": "normal"
    })
}
