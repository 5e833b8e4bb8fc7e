//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions in Browse mode.
///
/// Provides default vim-style bindings alongside arrow and paging keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Row cursor
        bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::CursorDown);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::CursorDown);
        bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::CursorUp);
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::CursorUp);

        // Page navigation
        bind(KeyCode::Char('h'), KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::Char('l'), KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::FirstPage);
        bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::FirstPage);
        bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::LastPage);
        bind(KeyCode::End, KeyModifiers::NONE, KeyAction::LastPage);

        // Direct page selection
        for digit in 1..=9u8 {
            bind(
                KeyCode::Char(char::from(b'0' + digit)),
                KeyModifiers::NONE,
                KeyAction::GotoPage(usize::from(digit)),
            );
        }
        bind(KeyCode::Char(':'), KeyModifiers::NONE, KeyAction::PromptPage);

        // Search
        bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::StartSearch);

        // Selection
        bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::ToggleSelect);
        bind(KeyCode::Char('a'), KeyModifiers::NONE, KeyAction::ToggleSelectPage);
        bind(KeyCode::Char('c'), KeyModifiers::NONE, KeyAction::ClearSelection);

        // Deletion
        bind(KeyCode::Char('d'), KeyModifiers::NONE, KeyAction::DeleteRow);
        bind(KeyCode::Delete, KeyModifiers::NONE, KeyAction::DeleteRow);
        bind(KeyCode::Char('D'), KeyModifiers::SHIFT, KeyAction::DeleteSelected);

        // Editing
        bind(KeyCode::Char('e'), KeyModifiers::NONE, KeyAction::BeginEdit);
        bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::BeginEdit);

        // Application controls
        bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn lookup(code: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
        KeyBindings::default().get(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn vim_and_arrow_keys_move_cursor() {
        assert_eq!(
            lookup(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(KeyAction::CursorDown)
        );
        assert_eq!(
            lookup(KeyCode::Up, KeyModifiers::NONE),
            Some(KeyAction::CursorUp)
        );
    }

    #[test]
    fn page_keys_navigate() {
        assert_eq!(
            lookup(KeyCode::PageDown, KeyModifiers::NONE),
            Some(KeyAction::NextPage)
        );
        assert_eq!(
            lookup(KeyCode::Char('h'), KeyModifiers::NONE),
            Some(KeyAction::PrevPage)
        );
        assert_eq!(
            lookup(KeyCode::Char('G'), KeyModifiers::SHIFT),
            Some(KeyAction::LastPage)
        );
    }

    #[test]
    fn digits_go_to_page() {
        assert_eq!(
            lookup(KeyCode::Char('1'), KeyModifiers::NONE),
            Some(KeyAction::GotoPage(1))
        );
        assert_eq!(
            lookup(KeyCode::Char('9'), KeyModifiers::NONE),
            Some(KeyAction::GotoPage(9))
        );
        assert_eq!(lookup(KeyCode::Char('0'), KeyModifiers::NONE), None);
    }

    #[test]
    fn colon_opens_page_prompt() {
        assert_eq!(
            lookup(KeyCode::Char(':'), KeyModifiers::NONE),
            Some(KeyAction::PromptPage)
        );
    }

    #[test]
    fn lowercase_d_deletes_row_uppercase_deletes_selected() {
        assert_eq!(
            lookup(KeyCode::Char('d'), KeyModifiers::NONE),
            Some(KeyAction::DeleteRow)
        );
        assert_eq!(
            lookup(KeyCode::Char('D'), KeyModifiers::SHIFT),
            Some(KeyAction::DeleteSelected)
        );
    }

    #[test]
    fn lowercase_c_clears_ctrl_c_quits() {
        assert_eq!(
            lookup(KeyCode::Char('c'), KeyModifiers::NONE),
            Some(KeyAction::ClearSelection)
        );
        assert_eq!(
            lookup(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn unbound_key_returns_none() {
        assert_eq!(lookup(KeyCode::Char('z'), KeyModifiers::NONE), None);
    }
}
