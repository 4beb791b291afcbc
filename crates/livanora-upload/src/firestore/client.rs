//! HTTP client for the Firestore REST API

use crate::config::UploadConfig;
use crate::error::{Result, UploadError};
use crate::firestore::{auth, endpoints, value};
use crate::store::{Document, DocumentStore};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Firestore database handle, opened once per run and reused for every write
pub struct FirestoreClient {
    client: Client,
    base_url: String,
    project_id: String,
    database_id: String,
    access_token: String,
}

impl FirestoreClient {
    /// Create a client with an already resolved access token
    pub fn new(config: &UploadConfig, access_token: String) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            project_id: config.project_id.clone(),
            database_id: config.database_id.clone(),
            access_token,
        })
    }

    /// Resolve credentials and build the client
    pub async fn connect(config: &UploadConfig) -> Result<Self> {
        let token = auth::access_token(config.access_token.as_deref()).await?;
        let client = Self::new(config, token)?;

        debug!(
            project = %client.project_id,
            database = %client.database_id,
            base_url = %client.base_url,
            "Connected to Firestore"
        );
        Ok(client)
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn database_id(&self) -> &str {
        &self.database_id
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    /// PATCH without an update mask replaces every field of the document,
    /// creating it if needed.
    async fn set_document(&self, collection: &str, document_id: &str, document: Document) -> Result<()> {
        let url = endpoints::document_url(
            &self.base_url,
            &self.project_id,
            &self.database_id,
            collection,
            document_id,
        );
        let body = json!({ "fields": value::encode_fields(&document) });

        let response = self
            .client
            .patch(&url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Rejected {
                path: format!("{}/{}", collection, document_id),
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        debug!(collection, document_id, status = status.as_u16(), "Document written");
        Ok(())
    }
}
