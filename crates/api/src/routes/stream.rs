//! Route definitions for the stream status placeholder.

use axum::routing::get;
use axum::Router;

use crate::handlers::stream;
use crate::state::AppState;

/// Stream routes, merged into `/api`.
///
/// ```text
/// GET    /stream/status     stream_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/stream/status", get(stream::stream_status))
}
