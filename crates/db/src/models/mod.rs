//! Model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create/save DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates

pub mod overlay;
pub mod player_settings;
