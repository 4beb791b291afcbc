//! Tag catalog derived from the impulse spreadsheet
//!
//! The app offers tag filters from a separate `tags` collection. Every
//! distinct tag used by an impulse gets one document there.

use crate::coerce;
use crate::error::Result;
use crate::input::{self, InputRow};
use crate::store::{to_document, DocumentStore};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Collection holding the tag catalog
pub const TAGS_COLLECTION: &str = "tags";

/// Document stored under `tags/{tag_document_id(name)}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    pub name: String,
    pub display_name: String,
}

impl TagRecord {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            display_name: name.to_string(),
        }
    }
}

/// Document id for a tag: lower-cased, anything outside `[a-z0-9]` becomes `_`
pub fn tag_document_id(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '_' })
        .collect()
}

/// Distinct tags across all rows, in order of first appearance
///
/// Tags are distinct by document id, so `Morgen` and `morgen` share one
/// catalog entry; the first spelling seen is kept.
pub fn collect_tags(rows: &[InputRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .flat_map(|row| coerce::tags(row.tags.as_deref()))
        .filter(|tag| seen.insert(tag_document_id(tag)))
        .collect()
}

/// Writes the tag catalog
pub struct TagUploader<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> TagUploader<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Upload the tags used in the CSV file at `source_path`
    ///
    /// Returns the number of tag documents written.
    pub async fn upload(&self, source_path: impl AsRef<Path>) -> Result<usize> {
        let rows = input::read_rows(source_path.as_ref())?;
        let tags = collect_tags(&rows);

        info!(tags = tags.len(), "Collected tags from impulse spreadsheet");

        let written = self.upload_tags(&tags).await?;

        info!(written, "Tags upload complete");
        Ok(written)
    }

    pub async fn upload_tags(&self, tags: &[String]) -> Result<usize> {
        let mut written = 0;

        for name in tags {
            let document_id = tag_document_id(name);
            info!(tag = %name, document_id = %document_id, "Uploading tag");

            let document = to_document(&TagRecord::new(name))?;
            self.store
                .set_document(TAGS_COLLECTION, &document_id, document)
                .await?;
            written += 1;
        }

        Ok(written)
    }
}
