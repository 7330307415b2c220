//! Health check handler and response type.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use std::time::Duration;

#[derive(serde::Serialize)]
pub(super) struct HealthCheckResponse {
    pub status: String,
    pub storage: String,
}

/// Health check: process is up, storage answers.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    const TIMEOUT: Duration = Duration::from_secs(5);

    // Probe an identifier that is never assigned; any answer means the
    // backing directory is reachable.
    let storage = match tokio::time::timeout(TIMEOUT, state.blob_store.exists(u64::MAX)).await {
        Ok(Ok(_)) => "healthy".to_string(),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Storage health check failed");
            format!("degraded: {}", e)
        }
        Err(_) => {
            tracing::error!("Storage health check timed out");
            "timeout".to_string()
        }
    };

    let healthy = storage == "healthy";
    let response = HealthCheckResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        storage,
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
