//! Shared blob filename generation.

/// On-disk filename for a video's payload. All filesystem access goes
/// through this so the layout cannot drift between writers and readers.
pub(crate) fn blob_filename(id: u64) -> String {
    format!("video-{}.bin", id)
}
