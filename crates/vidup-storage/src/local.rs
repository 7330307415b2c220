use crate::keys;
use crate::traits::{BlobStore, BlobStream, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem blob store
///
/// One file per video identifier under `base_path`. Overwrite semantics come
/// from create-truncate; every write is fsynced before it is reported
/// successful.
#[derive(Clone)]
pub struct LocalBlobStore {
    base_path: PathBuf,
}

impl LocalBlobStore {
    /// Create a new LocalBlobStore rooted at `base_path`, creating the
    /// directory if needed.
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::Config(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalBlobStore { base_path })
    }

    fn blob_path(&self, id: u64) -> PathBuf {
        self.base_path.join(keys::blob_filename(id))
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn exists(&self, id: u64) -> StorageResult<bool> {
        let path = self.blob_path(id);
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    async fn write(&self, id: u64, data: Bytes) -> StorageResult<u64> {
        let path = self.blob_path(id);
        let size = data.len();
        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            video_id = id,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Blob write successful"
        );

        Ok(size as u64)
    }

    async fn read_stream(&self, id: u64) -> StorageResult<BlobStream> {
        let path = self.blob_path(id);

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(id));
        }

        let file = fs::File::open(&path).await.map_err(|e| {
            StorageError::ReadFailed(format!("Failed to open file {}: {}", path.display(), e))
        })?;

        let reader = tokio_util::io::ReaderStream::new(file);

        let path_display = path.display().to_string();
        let stream = reader.map(move |result| {
            result.map_err(|e| {
                tracing::error!(path = %path_display, video_id = id, error = %e, "Blob stream read error");
                StorageError::ReadFailed(format!("Failed to read chunk: {}", e))
            })
        });

        Ok(Box::pin(stream))
    }

    async fn content_length(&self, id: u64) -> StorageResult<u64> {
        let path = self.blob_path(id);

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(id));
        }

        let meta = fs::metadata(&path)
            .await
            .map_err(|e| StorageError::ReadFailed(e.to_string()))?;
        Ok(meta.len())
    }
}
