/// Domain-level errors shared across crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested record does not exist, or the identifier in the
    /// request was not a well-formed id. Both render identically at the
    /// HTTP boundary.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity,
            id: id.into(),
        }
    }
}
