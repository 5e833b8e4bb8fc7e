//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent operator intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// Text entry (search bar, inline edit) is handled before binding lookup and
/// never produces a `KeyAction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row cursor
    /// Move the row cursor up within the page. Default: k/↑
    CursorUp,
    /// Move the row cursor down within the page. Default: j/↓
    CursorDown,

    // Pagination
    /// Jump to the first page. Default: g/Home
    FirstPage,
    /// Go to the previous page. Default: h/←/Page Up
    PrevPage,
    /// Go to the next page. Default: l/→/Page Down
    NextPage,
    /// Jump to the last page. Default: G/End
    LastPage,
    /// Jump to a page by number, clamped. Field: 1-based page (1-9)
    GotoPage(usize),
    /// Type any page number into a prompt. Default: :
    PromptPage,

    // Search
    /// Focus the search bar. Default: /
    StartSearch,

    // Selection
    /// Toggle selection of the row under the cursor. Default: Space
    ToggleSelect,
    /// Select every row on the page, or clear if already exactly selected. Default: a
    ToggleSelectPage,
    /// Clear the selection. Default: c
    ClearSelection,

    // Deletion
    /// Delete the row under the cursor. Default: d/Delete
    DeleteRow,
    /// Delete every selected record. Default: D
    DeleteSelected,

    // Editing
    /// Begin inline edit of the row under the cursor. Default: e/Enter
    BeginEdit,

    // Application
    /// Show or hide the key binding overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
