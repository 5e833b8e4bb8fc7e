//! Domain model types (pure).
//!
//! All types in this module are plain data with no I/O.

pub mod error;
pub mod key_action;
pub mod record;

// Re-export for convenience
pub use error::{AppError, LoadError};
pub use key_action::KeyAction;
pub use record::{display_role, Field, Record, RecordId};
