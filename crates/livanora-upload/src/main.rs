//! LIVANORA Upload - Main entry point

use clap::Parser;
use livanora_common::logging::{init_logging, LogConfig, LogLevel};
use livanora_upload::{commands, Cli, Commands};
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig::builder()
        .level(if cli.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Info
        })
        .log_file_prefix("livanora-upload")
        .build();

    // Environment variables take precedence over the flag-derived defaults
    let log_config = log_config.clone().with_env_overrides().unwrap_or(log_config);

    // The upload still runs if logging cannot be installed
    let guard = init_logging(&log_config)
        .map_err(|e| eprintln!("Warning: logging disabled: {:#}", e))
        .ok();

    if let Err(e) = execute_command(&cli).await {
        error!(error = %e, kind = ?e.kind(), "Upload failed");
        eprintln!("Error: {}", e);
        drop(guard);
        process::exit(1);
    }
}

/// Execute the selected upload
async fn execute_command(cli: &Cli) -> livanora_upload::Result<()> {
    let config = cli.config()?;

    match cli.command() {
        Commands::Impulses => {
            let written = commands::impulses::run(&config).await?;
            info!(written, dry_run = config.dry_run, "Impulses uploaded");
        },
        Commands::Tags => {
            let written = commands::tags::run(&config).await?;
            info!(written, dry_run = config.dry_run, "Tags uploaded");
        },
    }

    Ok(())
}
