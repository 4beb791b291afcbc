//! `livanora-upload tags`

use crate::commands::open_store;
use crate::config::UploadConfig;
use crate::error::Result;
use crate::tags::TagUploader;

/// Upload the tag catalog; returns the number of tag documents written
pub async fn run(config: &UploadConfig) -> Result<usize> {
    let store = open_store(config).await?;
    TagUploader::new(store.as_ref()).upload(&config.csv_path).await
}
