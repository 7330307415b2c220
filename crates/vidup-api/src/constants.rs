//! API constants.

/// Multipart form field carrying the video payload on upload.
pub const DATA_FIELD: &str = "data";
