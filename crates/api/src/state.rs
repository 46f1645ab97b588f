use std::sync::Arc;

use crate::config::ServerConfig;
use crate::stream::StreamState;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: livecast_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Stream status placeholder read by `/api/stream/status`.
    pub stream: Arc<StreamState>,
}
