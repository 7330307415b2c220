use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;
use vidup_core::models::Video;

#[utoipa::path(
    get,
    path = "/video",
    tag = "videos",
    responses(
        (status = 200, description = "All registered videos", body = [Video]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Video>>, HttpAppError> {
    Ok(Json(state.registry.list()))
}
