//! Route definitions for the playback settings singleton.

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Settings routes, merged into `/api`.
///
/// ```text
/// GET    /settings     get_settings
/// POST   /settings     save_settings
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/settings",
        get(settings::get_settings).post(settings::save_settings),
    )
}
