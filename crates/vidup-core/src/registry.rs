//! In-memory video registry.
//!
//! Owns the authoritative list of video metadata and hands out unique
//! identifiers. The registry is an explicitly owned object held in the
//! application state, never ambient global state. Records are append-only:
//! no update or delete operation is exposed, and the registry is discarded
//! at process shutdown.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::models::{NewVideo, Video};

#[derive(Debug, Default)]
struct RegistryInner {
    /// Records keyed by identifier. Lookup is by this key, never by position.
    videos: BTreeMap<u64, Video>,
    /// Last identifier handed out; 0 means none yet, so the first is 1.
    last_id: u64,
}

/// Registry of video metadata with monotonic identifier assignment.
///
/// Internally mutex-guarded: concurrent registrations cannot race the
/// counter, and the lock is never held across an await point.
#[derive(Debug, Default)]
pub struct VideoRegistry {
    inner: Mutex<RegistryInner>,
}

impl VideoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All registered videos, ordered by identifier (insertion order, since
    /// identifiers only grow).
    pub fn list(&self) -> Vec<Video> {
        let inner = self.inner.lock().expect("registry lock poisoned");
        inner.videos.values().cloned().collect()
    }

    /// Register a new video: assign the next identifier, derive the data URL
    /// from it and `base_url`, and store the record.
    ///
    /// Identifiers start at 1 and are strictly increasing for the lifetime of
    /// the registry; a value is never reused.
    pub fn add(&self, new_video: NewVideo, base_url: &str) -> Video {
        let mut inner = self.inner.lock().expect("registry lock poisoned");
        inner.last_id += 1;
        let id = inner.last_id;

        let video = Video {
            id,
            title: new_video.title,
            duration: new_video.duration,
            content_type: new_video.content_type,
            data_url: format!("{}/video/{}/data", base_url.trim_end_matches('/'), id),
        };
        inner.videos.insert(id, video.clone());
        video
    }

    /// Record for the given identifier, or `None` if it was never assigned.
    pub fn get(&self, id: u64) -> Option<Video> {
        let inner = self.inner.lock().expect("registry lock poisoned");
        inner.videos.get(&id).cloned()
    }
}
