//! Application state shared across handlers.

use std::sync::Arc;
use vidup_core::{Config, VideoRegistry};
use vidup_storage::BlobStore;

/// Everything a handler needs: configuration, the video registry, and the
/// blob store. Shared as `Arc<AppState>` through axum's `State`.
pub struct AppState {
    pub config: Config,
    pub registry: VideoRegistry,
    pub blob_store: Arc<dyn BlobStore>,
}

impl AppState {
    /// Build state with a fresh, empty registry.
    pub fn new(config: Config, blob_store: Arc<dyn BlobStore>) -> Self {
        AppState {
            config,
            registry: VideoRegistry::new(),
            blob_store,
        }
    }
}
