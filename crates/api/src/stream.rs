//! Process-wide stream status placeholder.
//!
//! The streaming pipeline itself is not part of this service; the
//! player only polls `/api/stream/status`. Nothing mutates this state
//! after startup, so the status endpoint reports "inactive, no source"
//! until a real pipeline is wired in. Anyone extending this must guard
//! mutation properly -- handlers run concurrently.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

/// Shared stream state read by the status endpoint.
#[derive(Debug, Default)]
pub struct StreamState {
    active: AtomicBool,
    rtsp_url: RwLock<Option<String>>,
}

impl StreamState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a stream is currently being served.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// The RTSP URL of the active stream, if any.
    pub async fn rtsp_url(&self) -> Option<String> {
        self.rtsp_url.read().await.clone()
    }
}
