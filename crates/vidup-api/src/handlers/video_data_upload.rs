use crate::constants::DATA_FIELD;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use std::sync::Arc;
use vidup_core::models::VideoStatus;
use vidup_core::AppError;

#[utoipa::path(
    post,
    path = "/video/{id}/data",
    tag = "videos",
    params(
        ("id" = u64, Path, description = "Video identifier")
    ),
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Payload stored", body = VideoStatus),
        (status = 400, description = "Missing or invalid multipart payload", body = ErrorResponse),
        (status = 404, description = "Identifier not registered", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn upload_video_data(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    mut multipart: Multipart,
) -> Result<Json<VideoStatus>, HttpAppError> {
    // The identifier must be registered before any bytes are accepted.
    let video = state
        .registry
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("No video registered with id {}", id)))?;

    let mut payload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(DATA_FIELD) {
            payload = Some(field.bytes().await?);
            break;
        }
    }
    let data = payload.ok_or_else(|| {
        AppError::InvalidInput(format!("Missing multipart field '{}'", DATA_FIELD))
    })?;

    // The body-limit layer bounds the transport; this guards the field itself.
    if data.len() > state.config.max_upload_size_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "{} bytes exceeds max {} bytes",
            data.len(),
            state.config.max_upload_size_bytes
        ))
        .into());
    }

    let written = state.blob_store.write(id, data).await?;

    tracing::info!(
        video_id = id,
        content_type = %video.content_type,
        size_bytes = written,
        "Stored video payload"
    );

    Ok(Json(VideoStatus::ready()))
}
