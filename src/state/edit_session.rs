//! Inline edit state machine.
//!
//! EditSession is a sum type with two states:
//! - Idle: no edit in progress
//! - Editing: one record's draft is being changed
//!
//! A single slot holds the session, so at most one record is ever being
//! edited. Beginning a new edit replaces the old draft without committing it.

use crate::model::{Field, Record, RecordId};
use crate::state::RecordStore;

/// Edit session state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    /// No edit in progress.
    #[default]
    Idle,
    /// A draft copy of one record, independent of the store until saved.
    Editing {
        /// Id of the record being edited.
        id: RecordId,
        /// Uncommitted copy of the record.
        draft: Record,
    },
}

impl EditSession {
    /// Start editing a copy of `record`, discarding any current draft.
    pub fn begin_edit(&mut self, record: &Record) {
        *self = EditSession::Editing {
            id: record.id.clone(),
            draft: record.clone(),
        };
    }

    /// Update exactly one field of the draft. No-op when idle.
    ///
    /// Any text is accepted, including the empty string.
    pub fn change_field(&mut self, field: Field, value: impl Into<String>) {
        if let EditSession::Editing { draft, .. } = self {
            draft.set_field(field, value);
        }
    }

    /// Commit the draft to `store` and return to Idle.
    ///
    /// Returns `true` if the store changed. Saving a draft whose record has
    /// since been deleted leaves the store untouched.
    pub fn save(&mut self, store: &mut RecordStore) -> bool {
        match std::mem::take(self) {
            EditSession::Editing { id, draft } => store.update_by_id(&id, draft),
            EditSession::Idle => false,
        }
    }

    /// Discard the draft and return to Idle. Never touches the store.
    pub fn cancel(&mut self) {
        *self = EditSession::Idle;
    }

    /// Whether an edit is in progress.
    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    /// Id of the record being edited, if any.
    pub fn editing_id(&self) -> Option<&RecordId> {
        match self {
            EditSession::Editing { id, .. } => Some(id),
            EditSession::Idle => None,
        }
    }

    /// The in-progress draft, if any.
    pub fn draft(&self) -> Option<&Record> {
        match self {
            EditSession::Editing { draft, .. } => Some(draft),
            EditSession::Idle => None,
        }
    }
}
