//! Blob store abstraction trait
//!
//! This module defines the BlobStore trait that storage backends must
//! implement, decoupling the request handlers from any particular storage
//! mechanism.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("No payload stored for video {0}")]
    NotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Chunked payload stream produced by [`BlobStore::read_stream`].
pub type BlobStream = Pin<Box<dyn Stream<Item = Result<Bytes, StorageError>> + Send>>;

/// Blob store abstraction
///
/// Maps a video identifier to an opaque binary payload. Writes overwrite any
/// prior payload for the same identifier; reads stream the payload back
/// byte-for-byte in original order.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Whether a payload has been written for this identifier.
    async fn exists(&self, id: u64) -> StorageResult<bool>;

    /// Durably store the full payload under the identifier, replacing any
    /// prior payload. Returns the number of bytes written.
    async fn write(&self, id: u64, data: Bytes) -> StorageResult<u64>;

    /// Stream the stored payload. Fails with [`StorageError::NotFound`] when
    /// no payload exists; read failures after the stream opens surface as
    /// stream items.
    async fn read_stream(&self, id: u64) -> StorageResult<BlobStream>;

    /// Size in bytes of the stored payload, if it exists.
    async fn content_length(&self, id: u64) -> StorageResult<u64>;
}
