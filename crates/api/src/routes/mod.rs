pub mod health;
pub mod overlay;
pub mod settings;
pub mod stream;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /overlays            list, create
/// /overlays/{id}       get, update, delete
/// /settings            get, save (replace-or-create)
/// /stream/status       stream status placeholder
/// /health              liveness
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(overlay::router())
        .merge(settings::router())
        .merge(stream::router())
        .merge(health::router())
}
