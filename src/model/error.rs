//! Error types for the roster application.
//!
//! Errors are layered with `thiserror` and compose via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error wrapping every fatal startup or terminal failure
//!   - `ConfigError` - Config file or environment values unusable
//!   - `LoggingError` - Log file could not be prepared
//!   - `TuiError` - Terminal I/O failures
//! - [`LoadError`] - Record source failures (HTTP, file, malformed JSON)
//!
//! # Error Recovery Strategy
//!
//! Load failures are **non-fatal**: the store stays empty, the status bar shows
//! the reason, and the operator can still quit normally. Mutations referencing
//! unknown ids are no-ops and never produce an error value at all.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file could not be prepared.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal failure while drawing or reading events.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),
}

/// Failure to obtain the initial record collection.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Local source file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// Local source file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed before a response arrived (DNS, TLS, timeout).
    #[error("Request to {url} failed: {reason}")]
    Http {
        /// URL that was requested.
        url: String,
        /// Transport error details.
        reason: String,
    },

    /// Server answered with a non-success status code.
    #[error("Request to {url} returned HTTP {status}")]
    Status {
        /// URL that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Body was not a JSON array of records.
    #[error("Invalid record data: {message}")]
    InvalidJson {
        /// Parser error details.
        message: String,
    },
}
