use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use livecast_core::error::CoreError;

use crate::response::ApiResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds infrastructure
/// variants. Implements [`IntoResponse`] to produce consistent
/// `{"success": false, "message": ...}` error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `livecast_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// A serialization failure while building a response body.
    #[error("{0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::warn!(entity = *entity, id = %id, "Record not found");
                StatusCode::NOT_FOUND
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Serialization(err) => {
                tracing::error!(error = %err, "Response serialization error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiResponse::<()>::failure(self.to_string());
        (status, axum::Json(body)).into_response()
    }
}
