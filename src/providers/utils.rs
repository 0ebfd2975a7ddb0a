use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

/// Shared HTTP client for outbound API calls
pub fn create_http_client(timeout_ms: u64) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()
        .context("Failed to build HTTP client")
}

/// Parse a base URL so that relative joins append to its path
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&with_slash).with_context(|| format!("Invalid base URL '{}'", raw))
}
