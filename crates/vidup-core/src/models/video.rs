use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;

/// Upload acknowledgement state. Only `Ready` is produced today; the
/// enumeration exists so the wire contract can grow without breaking clients.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum VideoState {
    Ready,
}

impl Display for VideoState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            VideoState::Ready => write!(f, "READY"),
        }
    }
}

/// Transient acknowledgement returned after a successful payload upload.
/// Not persisted anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatus {
    pub video_state: VideoState,
}

impl VideoStatus {
    pub fn ready() -> Self {
        VideoStatus {
            video_state: VideoState::Ready,
        }
    }
}

/// A registered video: metadata plus the URL its payload is served from.
///
/// `id` and `data_url` are assigned exactly once, at registration, and never
/// change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: u64,
    pub title: String,
    /// Duration in seconds.
    pub duration: f64,
    pub content_type: String,
    pub data_url: String,
}

/// Registration request body: the client-supplied metadata for a new video.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewVideo {
    pub title: String,
    /// Duration in seconds.
    pub duration: f64,
    pub content_type: String,
}
