use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use std::sync::Arc;
use vidup_core::models::{NewVideo, Video};
use vidup_core::Config;

#[utoipa::path(
    post,
    path = "/video",
    tag = "videos",
    request_body = NewVideo,
    responses(
        (status = 200, description = "Video registered, identifier and data URL assigned", body = Video),
        (status = 400, description = "Malformed request body", body = ErrorResponse)
    )
)]
pub async fn add_video(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ValidatedJson(new_video): ValidatedJson<NewVideo>,
) -> Result<Json<Video>, HttpAppError> {
    let base_url = request_base_url(&headers, &state.config);
    let video = state.registry.add(new_video, &base_url);

    tracing::info!(video_id = video.id, title = %video.title, "Registered video metadata");

    Ok(Json(video))
}

/// Base URL for data URLs, from the inbound request's Host header (the
/// externally visible address), falling back to the configured public
/// address. Port 80 is implied by the scheme and stripped.
fn request_base_url(headers: &HeaderMap, config: &Config) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(&config.public_address);
    format!("http://{}", host.strip_suffix(":80").unwrap_or(host))
}
