//! User record types.
//!
//! A `Record` is one row of the roster. Identity is by `RecordId`; every
//! other field is free-form text and is never validated.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ===== RecordId =====

/// Stable identifier of a record.
///
/// Sources may send ids as JSON strings or numbers. Both are normalised to
/// their textual form so `1` and `"1"` name the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Create an identifier from its textual form.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Textual form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for RecordId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<u64> for RecordId {
    fn from(raw: u64) -> Self {
        Self(raw.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

// ===== Field =====

/// Editable text fields of a record.
///
/// The id is deliberately absent: no operation may change a record's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Display name.
    Name,
    /// Email address.
    Email,
    /// Role, stored verbatim.
    Role,
}

impl Field {
    /// All editable fields in column order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Role];

    /// Column label.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Role => "Role",
        }
    }

    /// Next field, wrapping from Role back to Name.
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Role,
            Field::Role => Field::Name,
        }
    }

    /// Previous field, wrapping from Name back to Role.
    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Role,
            Field::Email => Field::Name,
            Field::Role => Field::Email,
        }
    }
}

// ===== Record =====

/// One user entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique, never reused identifier.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role in arbitrary case.
    pub role: String,
}

impl Record {
    /// Build a record from its four fields.
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Read one editable field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Role => &self.role,
        }
    }

    /// Overwrite one editable field, leaving the others untouched.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Role => self.role = value,
        }
    }

    /// Text of every field, id included, in column order.
    pub fn field_texts(&self) -> [&str; 4] {
        [self.id.as_str(), &self.name, &self.email, &self.role]
    }

    /// Case-insensitive substring match against any field.
    ///
    /// `term_lower` must already be lowercased; the empty term matches.
    pub fn matches_lowercase(&self, term_lower: &str) -> bool {
        term_lower.is_empty()
            || self
                .field_texts()
                .iter()
                .any(|text| text.to_lowercase().contains(term_lower))
    }
}

/// Render a role with its first letter capitalized and the rest lowercased.
///
/// Only affects display; stored values are never normalised.
pub fn display_role(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
