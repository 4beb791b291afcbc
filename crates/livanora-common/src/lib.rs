//! LIVANORA Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared plumbing for the LIVANORA data tooling.
//!
//! - **Logging**: one place that configures `tracing` for every binary
//!
//! # Example
//!
//! ```no_run
//! use livanora_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let _guard = init_logging(&LogConfig::from_env()?)?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```

pub mod logging;
