use std::path::PathBuf;

use anyhow::{Context, Result};

pub const TOKEN_ENV: &str = "RUDDERSTACK_ACCESS_TOKEN";
pub const API_URL_ENV: &str = "RUDDER_SYNC_API_URL";
pub const ARTIFACT_DIR_ENV: &str = "RUDDER_SYNC_ARTIFACT_DIR";

/// Resolve the access token: CLI flag first, then the environment.
pub fn access_token(flag: Option<String>) -> Result<String> {
    flag.or_else(|| std::env::var(TOKEN_ENV).ok())
        .with_context(|| format!("no access token: pass --access-token or set {TOKEN_ENV}"))
}

/// Optional API base URL override, mainly for pointing at a test server.
pub fn api_base_url() -> Option<String> {
    std::env::var(API_URL_ENV).ok()
}

/// Artifact directory: env override, else the platform data dir.
pub fn artifact_root() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(ARTIFACT_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::data_dir().context("could not determine data directory")?;
    Ok(base.join("rudder-sync"))
}
