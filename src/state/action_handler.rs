//! Key action handling (pure state transitions).
//!
//! Translates operator intents into view-model operations and keeps the UI
//! state (mode, cursor, inputs) consistent with the result. Nothing here
//! touches the terminal.

use crate::model::{Field, KeyAction};
use crate::state::app_state::{AppState, InputMode};
use crate::state::pagination::PageNav;
use crate::state::text_input::{apply_key, TextInput, TextKey};
use tracing::debug;

/// Apply a bound action in Browse mode.
///
/// `Quit` is not handled here; the event loop owns application exit.
pub fn handle_action(state: &mut AppState, action: KeyAction) {
    debug!(?action, "Handling action");

    match action {
        KeyAction::CursorUp => state.cursor_up(),
        KeyAction::CursorDown => state.cursor_down(),

        KeyAction::FirstPage => navigate(state, PageNav::First),
        KeyAction::PrevPage => navigate(state, PageNav::Previous),
        KeyAction::NextPage => navigate(state, PageNav::Next),
        KeyAction::LastPage => navigate(state, PageNav::Last),
        KeyAction::GotoPage(page) => navigate(state, PageNav::Goto(page)),
        KeyAction::PromptPage => {
            state.page_input = TextInput::new();
            state.mode = InputMode::PageNumber;
        }

        KeyAction::StartSearch => {
            state.mode = InputMode::Search;
        }

        KeyAction::ToggleSelect => {
            if let Some(id) = state.cursor_record_id() {
                state.view_model_mut().toggle_selection(&id);
            }
        }
        KeyAction::ToggleSelectPage => state.view_model_mut().toggle_all_on_page(),
        KeyAction::ClearSelection => state.view_model_mut().clear_selection(),

        KeyAction::DeleteRow => {
            if let Some(id) = state.cursor_record_id() {
                state.view_model_mut().delete_record(&id);
                state.clamp_cursor();
            }
        }
        KeyAction::DeleteSelected => {
            state.view_model_mut().delete_selected();
            state.clamp_cursor();
        }

        KeyAction::BeginEdit => begin_edit(state),

        KeyAction::Help => {
            state.help_visible = !state.help_visible;
        }

        KeyAction::Quit => {}
    }
}

fn navigate(state: &mut AppState, nav: PageNav) {
    let before = state.snapshot().page_info.current_page;
    state.view_model_mut().navigate(nav);
    if state.snapshot().page_info.current_page != before {
        state.cursor_row = 0;
    }
}

// ===== Search mode =====

/// Apply an editing key to the search bar; the term updates immediately.
pub fn handle_search_key(state: &mut AppState, key: TextKey) {
    let before = state.search_input.value().to_string();
    state.search_input = apply_key(std::mem::take(&mut state.search_input), key);

    if state.search_input.value() != before {
        let term = state.search_input.value().to_string();
        state.view_model_mut().set_search_term(term);
        state.cursor_row = 0;
    }
}

/// Leave the search bar, keeping the term.
pub fn submit_search(state: &mut AppState) {
    state.mode = InputMode::Browse;
}

/// Leave the search bar and clear the term.
pub fn cancel_search(state: &mut AppState) {
    state.search_input = TextInput::new();
    if !state.view_model().search_term().is_empty() {
        state.view_model_mut().set_search_term("");
        state.cursor_row = 0;
    }
    state.mode = InputMode::Browse;
}

// ===== Page-number prompt =====

/// Apply an editing key to the page prompt. Only digits are typed.
pub fn handle_page_key(state: &mut AppState, key: TextKey) {
    if let TextKey::Char(ch) = key {
        if !ch.is_ascii_digit() {
            return;
        }
    }
    state.page_input = apply_key(std::mem::take(&mut state.page_input), key);
}

/// Jump to the typed page, clamped, and leave the prompt.
///
/// An empty or unparsable number leaves the page where it is.
pub fn submit_page(state: &mut AppState) {
    let parsed = state.page_input.value().parse::<usize>();
    match parsed {
        Ok(page) => navigate(state, PageNav::Goto(page)),
        Err(err) => debug!(input = state.page_input.value(), %err, "Ignoring page number"),
    }
    cancel_page(state);
}

/// Leave the page prompt without moving.
pub fn cancel_page(state: &mut AppState) {
    state.page_input = TextInput::new();
    state.mode = InputMode::Browse;
}

// ===== Edit mode =====

/// Begin editing the cursor row, focusing its name field.
///
/// No-op on an empty page.
pub fn begin_edit(state: &mut AppState) {
    let Some(id) = state.cursor_record_id() else {
        return;
    };
    state.view_model_mut().begin_edit(&id);
    focus_edit_field(state, Field::Name);
}

/// Apply an editing key to the focused field and mirror it into the draft.
pub fn handle_edit_key(state: &mut AppState, key: TextKey) {
    let InputMode::Edit { field } = state.mode else {
        return;
    };

    let before = state.edit_input.value().to_string();
    state.edit_input = apply_key(std::mem::take(&mut state.edit_input), key);

    if state.edit_input.value() != before {
        let value = state.edit_input.value().to_string();
        state.view_model_mut().change_field(field, value);
    }
}

/// Move focus to the next field of the edit row.
pub fn next_edit_field(state: &mut AppState) {
    if let InputMode::Edit { field } = state.mode {
        focus_edit_field(state, field.next());
    }
}

/// Move focus to the previous field of the edit row.
pub fn prev_edit_field(state: &mut AppState) {
    if let InputMode::Edit { field } = state.mode {
        focus_edit_field(state, field.prev());
    }
}

/// Commit the draft and return to Browse.
pub fn save_edit(state: &mut AppState) {
    state.view_model_mut().save_edit();
    state.mode = InputMode::Browse;
    state.clamp_cursor();
}

/// Discard the draft and return to Browse.
pub fn cancel_edit(state: &mut AppState) {
    state.view_model_mut().cancel_edit();
    state.mode = InputMode::Browse;
}

fn focus_edit_field(state: &mut AppState, field: Field) {
    let Some(value) = state
        .view_model()
        .edit_session()
        .draft()
        .map(|draft| draft.field(field).to_string())
    else {
        state.mode = InputMode::Browse;
        return;
    };
    state.edit_input = TextInput::from_value(value);
    state.mode = InputMode::Edit { field };
}

#[cfg(test)]
#[path = "action_handler_tests.rs"]
mod tests;
