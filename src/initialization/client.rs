//! HTTP client initialization.
//!
//! This module provides the function that builds the `reqwest` client used by
//! [`crate::HttpTransport`].

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

/// Initializes the HTTP client for lookup requests.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header
/// - Per-request timeout
///
/// # Arguments
///
/// * `timeout_seconds` - Per-request timeout
/// * `user_agent` - User-Agent header value
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(
    timeout_seconds: u64,
    user_agent: &str,
) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(user_agent)
        .build()?;
    Ok(Arc::new(client))
}
