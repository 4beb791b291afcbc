//! Error types for the uploader
//!
//! Every failure aborts the run. Messages name the row and column involved
//! so the spreadsheet can be fixed and the upload re-run.

use thiserror::Error;

/// Result type alias for upload operations
pub type Result<T> = std::result::Result<T, UploadError>;

/// Coarse classification used for reporting and exit handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Source file missing, unreadable or malformed
    Io,
    /// A row's field is absent or fails coercion
    Validation,
    /// Document store unreachable or a write was rejected
    Backend,
    /// Settings are missing or invalid
    Config,
}

#[derive(Error, Debug)]
pub enum UploadError {
    /// File system operation failed
    #[error("Cannot read input '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV could not be parsed
    #[error("Malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    /// Header row lacks columns the mapping needs
    #[error("Input '{path}' is missing required columns: {}", .columns.join(", "))]
    MissingColumns { path: String, columns: Vec<String> },

    /// A row has more cells than the header names
    #[error("Input '{path}' line {line}: expected at most {expected} cells, found {found}")]
    ExtraCells {
        path: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A row failed field validation or coercion
    #[error("Row {row}, column '{column}': {message}")]
    Validation {
        row: usize,
        column: &'static str,
        message: String,
    },

    /// HTTP transport failure talking to the document store
    #[error("Document store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The document store answered with a non-success status
    #[error("Document store rejected write to '{path}' ({status}): {body}")]
    Rejected {
        path: String,
        status: u16,
        body: String,
    },

    /// Access token could not be obtained
    #[error("Cannot obtain access token: {0}. Set FIRESTORE_ACCESS_TOKEN or run 'gcloud auth login'.")]
    Auth(String),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Record could not be turned into a document body
    #[error("Failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
}

impl UploadError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn validation(row: usize, column: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            row,
            column,
            message: message.into(),
        }
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. }
            | Self::Csv(_)
            | Self::MissingColumns { .. }
            | Self::ExtraCells { .. } => ErrorKind::Io,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Http(_) | Self::Rejected { .. } | Self::Auth(_) | Self::Encode(_) => {
                ErrorKind::Backend
            },
            Self::Config(_) => ErrorKind::Config,
        }
    }
}
