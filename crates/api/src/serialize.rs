//! Identity mapping between storage and transport.
//!
//! Database ids are 64-bit integers; on the wire they travel as opaque
//! strings so clients never do arithmetic on them (and JavaScript
//! clients never lose precision). [`stringify_ids`] performs that
//! remapping uniformly for a single record or a sequence of records.

use serde_json::Value;

/// Remap the `id` field of a record (or each record of an array) from
/// its integer form to its decimal string form.
///
/// Idempotent: an `id` that is already a string is left untouched, and
/// objects without an `id` field pass through unchanged. No other field
/// is altered; nested objects inside record fields are not visited.
pub fn stringify_ids(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(stringify_ids).collect()),
        Value::Object(mut map) => {
            if let Some(id) = map.get("id").and_then(Value::as_i64) {
                map.insert("id".into(), Value::String(id.to_string()));
            }
            Value::Object(map)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn remaps_integer_id_to_string() {
        let record = json!({"id": 42, "name": "caption"});
        assert_eq!(
            stringify_ids(record),
            json!({"id": "42", "name": "caption"})
        );
    }

    #[test]
    fn remaps_each_record_of_an_array() {
        let records = json!([{"id": 1}, {"id": 2}]);
        assert_eq!(stringify_ids(records), json!([{"id": "1"}, {"id": "2"}]));
    }

    #[test]
    fn is_idempotent_on_already_stringified_records() {
        let record = json!({"id": "42", "name": "caption"});
        assert_eq!(stringify_ids(record.clone()), record);
    }

    #[test]
    fn leaves_records_without_an_id_untouched() {
        let record = json!({"rtsp_url": "", "volume": 100.0});
        assert_eq!(stringify_ids(record.clone()), record);
    }

    #[test]
    fn does_not_visit_nested_objects() {
        let record = json!({"id": 7, "position": {"id": 9, "x": 50}});
        let mapped = stringify_ids(record);
        assert_eq!(mapped["id"], "7");
        // The nested "id" is payload data, not an identifier.
        assert_eq!(mapped["position"]["id"], 9);
    }

    #[test]
    fn passes_scalars_through() {
        assert_eq!(stringify_ids(json!(null)), json!(null));
        assert_eq!(stringify_ids(json!("plain")), json!("plain"));
    }
}
