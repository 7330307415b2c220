use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use futures::StreamExt;
use std::sync::Arc;
use vidup_core::AppError;

#[utoipa::path(
    get,
    path = "/video/{id}/data",
    tag = "videos",
    params(
        ("id" = u64, Path, description = "Video identifier")
    ),
    responses(
        (status = 200, description = "Raw video bytes, original content type and length"),
        (status = 404, description = "Identifier not registered or no payload uploaded", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn download_video_data(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Response, HttpAppError> {
    let video = state
        .registry
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("No video registered with id {}", id)))?;

    if !state.blob_store.exists(id).await? {
        return Err(AppError::NotFound(format!("No video data uploaded for id {}", id)).into());
    }

    // Size and open the blob before any headers go out; failures past this
    // point can only abort the in-flight body.
    let content_length = state.blob_store.content_length(id).await?;
    let stream = state.blob_store.read_stream(id).await?;

    // Wrap storage stream for axum Body
    let body_stream = stream.map(|result| {
        result.map_err(|e| std::io::Error::other(format!("Blob stream error: {}", e)))
    });

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, video.content_type.as_str())
        .header(header::CONTENT_LENGTH, content_length)
        .body(Body::from_stream(body_stream))
        .map_err(|e| {
            HttpAppError(AppError::Internal(format!(
                "Failed to build download response: {}",
                e
            )))
        })
}
