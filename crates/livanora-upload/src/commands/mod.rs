//! Command implementations

pub mod impulses;
pub mod tags;

use crate::config::UploadConfig;
use crate::error::Result;
use crate::firestore::FirestoreClient;
use crate::store::{DocumentStore, MemoryStore};
use tracing::info;

/// Open the store a run writes to: Firestore, or a throwaway in-memory
/// store for dry runs
pub async fn open_store(config: &UploadConfig) -> Result<Box<dyn DocumentStore>> {
    if config.dry_run {
        info!("Dry run: documents are mapped but not sent to Firestore");
        return Ok(Box::new(MemoryStore::new()));
    }

    let client = FirestoreClient::connect(config).await?;
    info!(
        project = client.project_id(),
        database = client.database_id(),
        "Writing to Firestore"
    );
    Ok(Box::new(client))
}
