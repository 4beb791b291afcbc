//! Configuration for an upload run
//!
//! Built-in defaults point at the production LIVANORA project and the
//! spreadsheet location used by the data team. Environment variables (and a
//! `.env` file) override them; command-line flags override both.

use crate::error::{Result, UploadError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Upload Configuration Constants
// ============================================================================

/// Google Cloud project holding the Firestore database
pub const DEFAULT_PROJECT_ID: &str = "livanora-305c9";

/// Firestore database inside the project
pub const DEFAULT_DATABASE_ID: &str = "(default)";

/// Spreadsheet export, relative to the working directory
pub const DEFAULT_CSV_PATH: &str = "Input docs/4 LIVANORA Impulse Example Database.csv";

/// Firestore REST endpoint
pub const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com";

/// Per-request timeout in seconds
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 60;

/// Settings for one upload run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub project_id: String,

    pub database_id: String,

    /// CSV file to read
    pub csv_path: PathBuf,

    /// Firestore base URL, overridable for emulators and tests
    pub base_url: String,

    pub timeout_secs: u64,

    /// Pre-issued OAuth access token; when absent one is requested from gcloud
    #[serde(skip_serializing)]
    pub access_token: Option<String>,

    /// Map rows without writing to Firestore
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            project_id: DEFAULT_PROJECT_ID.to_string(),
            database_id: DEFAULT_DATABASE_ID.to_string(),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            base_url: DEFAULT_FIRESTORE_URL.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            access_token: None,
            dry_run: false,
        }
    }
}

impl UploadConfig {
    /// Load config from environment variables on top of the defaults
    ///
    /// Reads `.env` first if one exists in the working directory.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(project) = std::env::var("LIVANORA_PROJECT_ID") {
            config.project_id = project;
        }

        if let Ok(database) = std::env::var("LIVANORA_DATABASE_ID") {
            config.database_id = database;
        }

        if let Ok(path) = std::env::var("LIVANORA_CSV_PATH") {
            config.csv_path = PathBuf::from(path);
        }

        if let Ok(url) = std::env::var("FIRESTORE_BASE_URL") {
            config.base_url = url;
        }

        if let Ok(timeout) = std::env::var("FIRESTORE_TIMEOUT_SECS") {
            config.timeout_secs = timeout.trim().parse().map_err(|_| {
                UploadError::config(format!("FIRESTORE_TIMEOUT_SECS '{}' is not a number", timeout))
            })?;
        }

        if let Ok(token) = std::env::var("FIRESTORE_ACCESS_TOKEN") {
            if !token.trim().is_empty() {
                config.access_token = Some(token.trim().to_string());
            }
        }

        Ok(config)
    }

    /// Reject settings that cannot address a Firestore database
    pub fn validate(&self) -> Result<()> {
        if self.project_id.trim().is_empty() {
            return Err(UploadError::config("project id must not be empty"));
        }

        if self.database_id.trim().is_empty() {
            return Err(UploadError::config("database id must not be empty"));
        }

        if self.project_id.contains('/') || self.database_id.contains('/') {
            return Err(UploadError::config("project and database ids must not contain '/'"));
        }

        if self.timeout_secs == 0 {
            return Err(UploadError::config("request timeout must be at least one second"));
        }

        Ok(())
    }
}
