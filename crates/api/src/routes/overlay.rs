//! Route definitions for overlay resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::overlay;
use crate::state::AppState;

/// Overlay routes, merged into `/api`.
///
/// ```text
/// GET    /overlays          list_overlays
/// POST   /overlays          create_overlay
/// GET    /overlays/{id}     get_overlay
/// PUT    /overlays/{id}     update_overlay
/// DELETE /overlays/{id}     delete_overlay
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/overlays",
            get(overlay::list_overlays).post(overlay::create_overlay),
        )
        .route(
            "/overlays/{id}",
            get(overlay::get_overlay)
                .put(overlay::update_overlay)
                .delete(overlay::delete_overlay),
        )
}
