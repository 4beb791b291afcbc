//! Document store abstraction
//!
//! The uploader only ever needs one operation: replace the document at
//! `collection/id` with a new body. [`FirestoreClient`](crate::firestore::FirestoreClient)
//! does that over REST; [`MemoryStore`] keeps documents in a map for dry runs
//! and tests.

use crate::error::{Result, UploadError};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Plain JSON object body of a document
pub type Document = Map<String, Value>;

/// Trait for document stores (dependency injection)
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create or fully overwrite the document at `collection/document_id`
    ///
    /// Fields present in an earlier version but absent from `document` must
    /// not survive the write.
    async fn set_document(&self, collection: &str, document_id: &str, document: Document) -> Result<()>;
}

/// Serialize a record into a document body; the record must serialize to a
/// JSON object.
pub fn to_document<T: Serialize>(record: &T) -> Result<Document> {
    match serde_json::to_value(record)? {
        Value::Object(fields) => Ok(fields),
        other => Err(UploadError::config(format!(
            "document body must be an object, got {}",
            json_type(&other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// In-memory store with whole-document overwrite semantics
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<BTreeMap<(String, String), Document>>,
    writes: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current body of `collection/document_id`
    pub fn get(&self, collection: &str, document_id: &str) -> Option<Document> {
        self.documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&(collection.to_string(), document_id.to_string()))
            .cloned()
    }

    /// Ids stored in `collection`, sorted
    pub fn document_ids(&self, collection: &str) -> Vec<String> {
        self.documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .keys()
            .filter(|(c, _)| c == collection)
            .map(|(_, id)| id.clone())
            .collect()
    }

    /// Number of write calls received, including overwrites
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn set_document(&self, collection: &str, document_id: &str, document: Document) -> Result<()> {
        self.documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert((collection.to_string(), document_id.to_string()), document);
        *self.writes.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) += 1;
        Ok(())
    }
}
