//! Row-by-row impulse upload
//!
//! The source is read completely, then each row is mapped and written before
//! the next one is looked at. The first failing row stops the run; rows
//! written before it stay written.

use crate::error::Result;
use crate::input::{self, InputRow};
use crate::record::{Impulse, IMPULSES_COLLECTION};
use crate::store::{to_document, DocumentStore};
use std::path::Path;
use tracing::info;

/// Writes one impulse document per spreadsheet row
pub struct RecordUploader<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> RecordUploader<'a> {
    /// Uploader targeting the `impulses` collection
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Upload every row of the CSV file at `source_path`
    ///
    /// Returns the number of documents written.
    pub async fn upload(&self, source_path: impl AsRef<Path>) -> Result<usize> {
        let source_path = source_path.as_ref();
        let rows = input::read_rows(source_path)?;

        info!(
            path = %source_path.display(),
            rows = rows.len(),
            collection = IMPULSES_COLLECTION,
            "Read impulse spreadsheet"
        );

        let written = self.upload_rows(&rows).await?;

        info!(written, "Upload complete");
        Ok(written)
    }

    /// Upload already parsed rows in order
    pub async fn upload_rows(&self, rows: &[InputRow]) -> Result<usize> {
        let mut written = 0;

        for row in rows {
            let Impulse { impulse_id, record } = Impulse::from_row(row)?;

            info!(
                impulse_id = %impulse_id,
                title_short = %record.title_short,
                "Uploading impulse"
            );

            let document = to_document(&record)?;
            self.store
                .set_document(IMPULSES_COLLECTION, &impulse_id, document)
                .await?;
            written += 1;
        }

        Ok(written)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::MemoryStore;

    fn row(line: usize, id: &str, weight: &str) -> InputRow {
        InputRow {
            line,
            impulse_id: Some(id.to_string()),
            sequence: Some(line.to_string()),
            title_short: Some(format!("Impuls {}", id)),
            wellbeing_weight: Some(weight.to_string()),
            ..InputRow::default()
        }
    }

    #[tokio::test]
    async fn test_rows_are_written_in_order() {
        let store = MemoryStore::new();
        let uploader = RecordUploader::new(&store);

        let written = uploader
            .upload_rows(&[row(2, "IMP-1", "3"), row(3, "IMP-2", "5")])
            .await
            .unwrap();

        assert_eq!(written, 2);
        assert_eq!(store.document_ids("impulses"), vec!["IMP-1", "IMP-2"]);
        let doc = store.get("impulses", "IMP-2").unwrap();
        assert_eq!(doc["wellbeing_weight"], 5);
        assert_eq!(doc["tags"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_failing_row_stops_run_and_keeps_earlier_writes() {
        let store = MemoryStore::new();
        let uploader = RecordUploader::new(&store);

        let err = uploader
            .upload_rows(&[row(2, "IMP-1", "3"), row(3, "IMP-2", "hoch"), row(4, "IMP-3", "1")])
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(store.document_ids("impulses"), vec!["IMP-1"]);
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_ids_last_row_wins() {
        let store = MemoryStore::new();
        let uploader = RecordUploader::new(&store);

        let mut second = row(3, "IMP-1", "9");
        second.title_short = Some("Zweite Fassung".to_string());

        uploader.upload_rows(&[row(2, "IMP-1", "3"), second]).await.unwrap();

        let doc = store.get("impulses", "IMP-1").unwrap();
        assert_eq!(doc["title_short"], "Zweite Fassung");
        assert_eq!(doc["wellbeing_weight"], 9);
    }
}
