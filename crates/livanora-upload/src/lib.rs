//! LIVANORA Impulse Uploader
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Loads the impulse spreadsheet (a CSV export) into the app's Firestore
//! database. Run once per content refresh.
//!
//! # Overview
//!
//! - **Input**: read and validate the CSV header, materialize every row
//! - **Mapping**: rename columns, coerce numbers and flags, group zone
//!   flags into `zones` and zone texts into `zone_details`
//! - **Upload**: overwrite `impulses/{impulseId}` row by row
//! - **Tags**: optionally rebuild the `tags` catalog from the same file
//!
//! # Example
//!
//! ```no_run
//! use livanora_upload::{store::MemoryStore, uploader::RecordUploader};
//!
//! #[tokio::main]
//! async fn main() -> livanora_upload::Result<()> {
//!     let store = MemoryStore::new();
//!     let written = RecordUploader::new(&store).upload("impulses.csv").await?;
//!     tracing::info!(written, "done");
//!     Ok(())
//! }
//! ```

pub mod coerce;
pub mod commands;
pub mod config;
pub mod error;
pub mod firestore;
pub mod input;
pub mod record;
pub mod store;
pub mod tags;
pub mod uploader;

// Re-export commonly used types
pub use config::UploadConfig;
pub use error::{ErrorKind, Result, UploadError};
pub use record::{Impulse, ImpulseRecord};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Upload LIVANORA impulse content to Firestore
#[derive(Parser, Debug)]
#[command(name = "livanora-upload")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// What to upload (defaults to impulses)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// CSV export to read
    #[arg(long, global = true)]
    pub csv: Option<PathBuf>,

    /// Google Cloud project id
    #[arg(long, global = true)]
    pub project: Option<String>,

    /// Firestore database id
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Map every row but do not write to Firestore
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available uploads
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Overwrite one `impulses` document per spreadsheet row
    Impulses,

    /// Rebuild the `tags` collection from the tags used by the impulses
    Tags,
}

impl Cli {
    /// Subcommand to run; bare invocation uploads impulses
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Impulses)
    }

    /// Environment configuration with command-line overrides applied
    pub fn config(&self) -> Result<UploadConfig> {
        let mut config = UploadConfig::from_env()?;

        if let Some(ref csv) = self.csv {
            config.csv_path = csv.clone();
        }

        if let Some(ref project) = self.project {
            config.project_id = project.clone();
        }

        if let Some(ref database) = self.database {
            config.database_id = database.clone();
        }

        config.dry_run |= self.dry_run;

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_bare_invocation_uploads_impulses() {
        let cli = Cli::try_parse_from(["livanora-upload"]).unwrap();
        assert_eq!(cli.command(), Commands::Impulses);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "livanora-upload",
            "tags",
            "--csv",
            "export.csv",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.command(), Commands::Tags);
        assert_eq!(cli.csv, Some(PathBuf::from("export.csv")));
        assert!(cli.dry_run);
    }

    #[test]
    #[serial]
    fn test_flags_override_environment() {
        std::env::set_var("LIVANORA_PROJECT_ID", "from-env");
        std::env::remove_var("LIVANORA_DATABASE_ID");

        let cli = Cli::try_parse_from(["livanora-upload", "--project", "from-flag"]).unwrap();
        let config = cli.config().unwrap();

        assert_eq!(config.project_id, "from-flag");
        assert_eq!(config.database_id, crate::config::DEFAULT_DATABASE_ID);

        std::env::remove_var("LIVANORA_PROJECT_ID");
    }

    #[test]
    #[serial]
    fn test_empty_project_flag_is_rejected() {
        let cli = Cli::try_parse_from(["livanora-upload", "--project", ""]).unwrap();
        assert_eq!(cli.config().unwrap_err().kind(), ErrorKind::Config);
    }
}
