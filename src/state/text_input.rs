//! Single-line text input (pure state transitions).
//!
//! Backs both the search bar and the inline edit field. The cursor counts
//! characters, not bytes, so multi-byte input never splits a code point.
//! All functions are pure - no side effects, testable without TUI.

/// Text being typed plus the cursor position in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

/// Editing keys understood by a `TextInput`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    /// Insert a character at the cursor.
    Char(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    /// Move the cursor one character left.
    Left,
    /// Move the cursor one character right.
    Right,
    /// Move the cursor to the start.
    Home,
    /// Move the cursor to the end.
    End,
}

impl TextInput {
    /// Empty input with the cursor at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Input pre-filled with `value`, cursor at the end.
    pub fn from_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.value.len())
    }
}

/// Apply one editing key, returning the updated input.
pub fn apply_key(input: TextInput, key: TextKey) -> TextInput {
    match key {
        TextKey::Char(ch) => handle_char_input(input, ch),
        TextKey::Backspace => handle_backspace(input),
        TextKey::Delete => handle_delete(input),
        TextKey::Left => handle_cursor_left(input),
        TextKey::Right => handle_cursor_right(input),
        TextKey::Home => TextInput { cursor: 0, ..input },
        TextKey::End => {
            let cursor = input.char_len();
            TextInput { cursor, ..input }
        }
    }
}

/// Insert the character at the cursor and advance the cursor.
pub fn handle_char_input(mut input: TextInput, ch: char) -> TextInput {
    let offset = input.byte_offset(input.cursor);
    input.value.insert(offset, ch);
    input.cursor += 1;
    input
}

/// Delete the character before the cursor, if any.
pub fn handle_backspace(mut input: TextInput) -> TextInput {
    if input.cursor > 0 {
        let offset = input.byte_offset(input.cursor - 1);
        input.value.remove(offset);
        input.cursor -= 1;
    }
    input
}

/// Delete the character under the cursor, if any.
pub fn handle_delete(mut input: TextInput) -> TextInput {
    if input.cursor < input.char_len() {
        let offset = input.byte_offset(input.cursor);
        input.value.remove(offset);
    }
    input
}

/// Move cursor left by one character. Saturates at 0.
pub fn handle_cursor_left(input: TextInput) -> TextInput {
    TextInput {
        cursor: input.cursor.saturating_sub(1),
        ..input
    }
}

/// Move cursor right by one character. Saturates at the text length.
pub fn handle_cursor_right(input: TextInput) -> TextInput {
    let max_cursor = input.char_len();
    TextInput {
        cursor: (input.cursor + 1).min(max_cursor),
        ..input
    }
}
