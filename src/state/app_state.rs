//! Application state and transitions.
//!
//! AppState is the root state type: the view-model (domain) plus the UI
//! state needed to turn key presses into view-model operations.

use crate::model::{Field, RecordId};
use crate::state::pagination::PageSize;
use crate::state::text_input::TextInput;
use crate::state::view_model::{Snapshot, ViewModel};

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Mode**: Browse ⇄ Search (typing into the search bar),
///   Browse ⇄ Edit (typing into one field of the cursor row) and
///   Browse ⇄ PageNumber (typing a page to jump to)
/// - **Cursor**: row index within the visible page, kept in range after
///   every transition
/// - **Load status**: Loading → Loaded | Failed, exactly once
#[derive(Debug, Clone)]
pub struct AppState {
    /// Domain state: records, term, page, selection, edit session.
    view_model: ViewModel,

    /// Which widget receives typed characters.
    pub mode: InputMode,

    /// Search bar contents. Its value always equals the view-model's term.
    pub search_input: TextInput,

    /// Contents of the field being edited, mirrored into the draft on
    /// every keystroke.
    pub edit_input: TextInput,

    /// Digits typed into the page-number prompt.
    pub page_input: TextInput,

    /// Highlighted row on the current page (0-based).
    pub cursor_row: usize,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Outcome of the one-shot initial load.
    pub load_status: LoadStatus,
}

/// Input routing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys go through key bindings.
    Browse,
    /// Printable keys edit the search term.
    Search,
    /// Printable keys edit one field of the draft.
    Edit {
        /// Field currently focused in the edit row.
        field: Field,
    },
    /// Digits go to the page-number prompt.
    PageNumber,
}

/// Progress of the initial record load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Fetch still in flight; the table is empty.
    Loading,
    /// Records installed.
    Loaded {
        /// Number of records received.
        count: usize,
    },
    /// Fetch failed; the store stays empty.
    Failed {
        /// Human-readable failure reason.
        reason: String,
    },
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl AppState {
    /// Create new AppState with an empty store.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            view_model: ViewModel::new(page_size),
            mode: InputMode::Browse,
            search_input: TextInput::new(),
            edit_input: TextInput::new(),
            page_input: TextInput::new(),
            cursor_row: 0,
            help_visible: false,
            load_status: LoadStatus::Loading,
        }
    }

    /// Get immutable reference to the view-model.
    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    /// Get mutable reference to the view-model.
    ///
    /// Callers must call `clamp_cursor` after mutating.
    pub fn view_model_mut(&mut self) -> &mut ViewModel {
        &mut self.view_model
    }

    /// Derive the current page.
    pub fn snapshot(&self) -> Snapshot {
        self.view_model.snapshot()
    }

    /// Id of the record under the cursor, if the page is non-empty.
    pub fn cursor_record_id(&self) -> Option<RecordId> {
        self.snapshot()
            .visible_records
            .get(self.cursor_row)
            .map(|record| record.id.clone())
    }

    /// Keep the cursor inside the visible page.
    pub fn clamp_cursor(&mut self) {
        let visible = self.snapshot().visible_records.len();
        self.cursor_row = self.cursor_row.min(visible.saturating_sub(1));
    }

    /// Move the cursor one row up. Saturates at the first row.
    pub fn cursor_up(&mut self) {
        self.cursor_row = self.cursor_row.saturating_sub(1);
    }

    /// Move the cursor one row down. Saturates at the last row.
    pub fn cursor_down(&mut self) {
        self.cursor_row += 1;
        self.clamp_cursor();
    }
}
