//! File-based record source.

use crate::model::{LoadError, Record};
use crate::parser::parse_records;
use std::path::Path;

/// Read and parse a local JSON array file.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file does not exist,
/// `LoadError::Io` for other read failures, and `LoadError::InvalidJson`
/// if the content is not a record array.
pub fn read_records(path: &Path) -> Result<Vec<Record>, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    parse_records(&contents)
}
