//! Record sources.
//!
//! This module provides the one-shot initial load:
//! - HTTP(S) fetch for remote sources
//! - File read for local sources
//! - Unified RecordSource enum for both
//!
//! The load runs on a background thread so the TUI can render an empty table
//! while it is in flight. There is no retry.

use crate::model::{LoadError, Record};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use tracing::{info, warn};

pub mod file;
pub mod http;

/// Result of the initial load, delivered once over a channel.
pub type LoadOutcome = Result<Vec<Record>, LoadError>;

/// Where the initial record collection comes from.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    /// Remote JSON array fetched over HTTP(S).
    Url(String),
    /// Local JSON array file.
    File(PathBuf),
}

impl RecordSource {
    /// Fetch and parse the whole collection, blocking the calling thread.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` for transport, I/O, status or parse failures.
    pub fn fetch(&self, timeout: Duration) -> LoadOutcome {
        match self {
            RecordSource::Url(url) => http::fetch_records(url, timeout),
            RecordSource::File(path) => file::read_records(path),
        }
    }
}

impl std::fmt::Display for RecordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordSource::Url(url) => f.write_str(url),
            RecordSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Classify a configured source string.
///
/// `http://` and `https://` prefixes select a URL; anything else is a path.
pub fn detect_record_source(raw: &str) -> RecordSource {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        RecordSource::Url(trimmed.to_string())
    } else {
        RecordSource::File(PathBuf::from(trimmed))
    }
}

/// Start the initial load on a background thread.
///
/// Returns a receiver that yields exactly one `LoadOutcome`.
pub fn spawn_load(source: RecordSource, timeout: Duration) -> Receiver<LoadOutcome> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        info!(%source, "Loading records");
        let outcome = source.fetch(timeout);
        if let Err(err) = &outcome {
            warn!(%source, error = %err, "Record load failed");
        }
        // Receiver gone means the app already quit.
        let _ = tx.send(outcome);
    });
    rx
}
