//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use vidup_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vidup API",
        version = "0.1.0",
        description = "Video upload service: register video metadata, upload the binary payload, and stream it back."
    ),
    paths(
        handlers::video_list::list_videos,
        handlers::video_add::add_video,
        handlers::video_data_upload::upload_video_data,
        handlers::video_data_download::download_video_data,
    ),
    components(schemas(
        models::Video,
        models::NewVideo,
        models::VideoStatus,
        models::VideoState,
        error::ErrorResponse,
    )),
    tags(
        (name = "videos", description = "Video metadata and payload endpoints")
    )
)]
pub struct ApiDoc;

/// Returns the OpenAPI spec served at /api/openapi.json.
pub fn openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
