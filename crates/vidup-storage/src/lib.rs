//! Vidup Storage Library
//!
//! This crate provides the blob-store abstraction for video payloads and its
//! local-filesystem implementation. Payloads are opaque byte blobs keyed by
//! the numeric video identifier; the on-disk filename layout is centralized
//! in the `keys` module so every caller stays consistent.

pub mod factory;
pub(crate) mod keys;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use factory::create_blob_store;
pub use local::LocalBlobStore;
pub use traits::{BlobStore, BlobStream, StorageError, StorageResult};
