//! HTTP client construction for the analysis service.
//!
//! One blocking client with explicit timeouts, shared by every request the
//! harness makes. Prevents indefinite hangs on slow or unresponsive
//! servers.

use anyhow::{bail, Context, Result};
use reqwest::blocking::{Client, Response};
use std::time::Duration;

pub(crate) const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
pub(crate) const HTTP_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Create the blocking HTTP client with timeout configuration.
/// - connect_timeout: maximum time to establish a TCP connection
/// - timeout: maximum time for the entire request (connection + transfer)
pub(crate) fn create_http_client() -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
        .user_agent("vigil-harness")
        .build()
        .context("Failed to create HTTP client")
}

/// Validate a response status code and return a descriptive error if not
/// successful. Used on the status-query path, where a failure is transient
/// and only needs a message, not a typed error.
pub(crate) fn validate_response_status(response: &Response, context: &str) -> Result<()> {
    if !response.status().is_success() {
        let status = response.status();
        bail!(
            "{}: HTTP {} - {}",
            context,
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error")
        );
    }
    Ok(())
}
