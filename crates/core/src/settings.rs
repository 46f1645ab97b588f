//! Default values for the playback settings singleton.
//!
//! Saving settings replaces the whole record: any field absent from the
//! request is reset to its default below, never kept from the stored
//! row. Reading settings before the first save synthesizes this default
//! record without persisting it.

use serde_json::{json, Value};

/// RTSP source URL; empty until the user configures one.
pub const DEFAULT_RTSP_URL: &str = "";

/// Playback volume, 0-100 scale.
pub const DEFAULT_VOLUME: f64 = 100.0;

/// Whether playback starts automatically.
pub const DEFAULT_AUTOPLAY: bool = false;

/// The synthesized settings record returned before any save.
///
/// Deliberately has no `updated_at`: nothing has been written yet.
pub fn default_record() -> Value {
    json!({
        "rtsp_url": DEFAULT_RTSP_URL,
        "volume": DEFAULT_VOLUME,
        "autoplay": DEFAULT_AUTOPLAY,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_matches_documented_defaults() {
        let record = default_record();
        assert_eq!(record["rtsp_url"], "");
        assert_eq!(record["volume"], 100.0);
        assert_eq!(record["autoplay"], false);
        assert!(record.get("updated_at").is_none());
    }
}
