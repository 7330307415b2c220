//! Application setup: state wiring, routes, and server startup.

pub mod routes;
pub mod server;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;
use vidup_core::Config;
use vidup_storage::create_blob_store;

/// Initialize the application: build the blob store from configuration, wire
/// the state, and assemble the router.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router), anyhow::Error> {
    let blob_store = create_blob_store(&config).await?;
    let state = Arc::new(AppState::new(config, blob_store));
    let router = routes::setup_routes(&state.config, state.clone())?;
    Ok((state, router))
}
