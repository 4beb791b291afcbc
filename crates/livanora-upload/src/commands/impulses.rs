//! `livanora-upload impulses`

use crate::commands::open_store;
use crate::config::UploadConfig;
use crate::error::Result;
use crate::uploader::RecordUploader;

/// Upload the impulse spreadsheet; returns the number of documents written
pub async fn run(config: &UploadConfig) -> Result<usize> {
    let store = open_store(config).await?;
    RecordUploader::new(store.as_ref())
        .upload(&config.csv_path)
        .await
}
