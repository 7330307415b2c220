use crate::{BlobStore, LocalBlobStore, StorageResult};
use std::sync::Arc;
use vidup_core::Config;

/// Create the blob store described by the configuration.
pub async fn create_blob_store(config: &Config) -> StorageResult<Arc<dyn BlobStore>> {
    let store = LocalBlobStore::new(config.storage_path.clone()).await?;
    Ok(Arc::new(store))
}
