//! HTTP request handlers.
//!
//! One module per operation: list, register, upload payload, download
//! payload. Handlers return `Result<impl IntoResponse, HttpAppError>` so
//! every failure renders through the shared error envelope.

pub mod video_add;
pub mod video_data_download;
pub mod video_data_upload;
pub mod video_list;
