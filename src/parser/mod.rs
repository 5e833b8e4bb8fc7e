//! JSON parser for record collections.
//!
//! Pure parsing: converts a response body into validated `Record`s.
//! The body must be a JSON array of `{id, name, email, role}` objects.

use crate::model::{LoadError, Record, RecordId};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::warn;

/// Raw JSON structure for one record.
///
/// Extra keys are ignored; the four known keys are required.
#[derive(Debug, Deserialize)]
struct RawRecord {
    id: RecordId,
    name: String,
    email: String,
    role: String,
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        Record {
            id: raw.id,
            name: raw.name,
            email: raw.email,
            role: raw.role,
        }
    }
}

/// Parse a JSON array body into records, preserving source order.
///
/// Duplicate ids keep their first occurrence; later duplicates are dropped
/// and logged so identity-by-id holds inside the store.
///
/// # Errors
///
/// Returns `LoadError::InvalidJson` if the body is not a JSON array or any
/// element is missing a required field.
pub fn parse_records(body: &str) -> Result<Vec<Record>, LoadError> {
    let raw: Vec<RawRecord> =
        serde_json::from_str(body).map_err(|e| LoadError::InvalidJson {
            message: e.to_string(),
        })?;

    let mut seen = HashSet::with_capacity(raw.len());
    let mut records = Vec::with_capacity(raw.len());

    for entry in raw {
        if seen.insert(entry.id.clone()) {
            records.push(Record::from(entry));
        } else {
            warn!(id = %entry.id, "Dropping record with duplicate id");
        }
    }

    Ok(records)
}
