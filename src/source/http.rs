//! HTTP record source.
//!
//! One blocking GET per run; called from the background load thread.

use crate::model::{LoadError, Record};
use crate::parser::parse_records;
use std::time::Duration;
use tracing::debug;

/// Fetch a JSON array of records from `url`.
///
/// # Errors
///
/// Returns `LoadError::Http` for transport failures (including timeout),
/// `LoadError::Status` for non-2xx responses, and `LoadError::InvalidJson`
/// for bodies that are not record arrays.
pub fn fetch_records(url: &str, timeout: Duration) -> Result<Vec<Record>, LoadError> {
    let http_error = |e: reqwest::Error| LoadError::Http {
        url: url.to_string(),
        reason: e.to_string(),
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("roster/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(http_error)?;

    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .map_err(http_error)?;

    let status = response.status();
    debug!(url, %status, "Received response");
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().map_err(http_error)?;
    parse_records(&body)
}
