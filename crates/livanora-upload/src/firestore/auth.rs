//! OAuth access token for the Firestore REST API
//!
//! A token from configuration wins. Otherwise the gcloud CLI of the
//! operator's machine is asked for one, once per run.

use crate::error::{Result, UploadError};
use tokio::process::Command;
use tracing::debug;

/// Resolve the bearer token used for every request of this run
pub async fn access_token(configured: Option<&str>) -> Result<String> {
    if let Some(token) = configured.map(str::trim).filter(|t| !t.is_empty()) {
        debug!("Using access token from configuration");
        return Ok(token.to_string());
    }

    debug!("Requesting access token from gcloud");
    gcloud_access_token().await
}

async fn gcloud_access_token() -> Result<String> {
    let output = Command::new("gcloud")
        .args(["auth", "print-access-token"])
        .output()
        .await
        .map_err(|e| UploadError::auth(format!("failed to run gcloud: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(UploadError::auth(format!(
            "gcloud exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(UploadError::auth("gcloud printed an empty token"));
    }

    Ok(token)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_configured_token_is_used_verbatim() {
        let token = access_token(Some("  ya29.configured\n")).await.unwrap();
        assert_eq!(token, "ya29.configured");
    }
}
