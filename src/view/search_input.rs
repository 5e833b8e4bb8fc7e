//! Search input widget for rendering the search bar.

use super::styles::RosterStyles;
use crate::state::TextInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Placeholder shown while the term is empty and the bar is not focused.
const PLACEHOLDER: &str = "Search by name, email or role (press /)";

/// Split `value` at a char-indexed cursor and render the cursor cell.
///
/// At the end of the text the cursor is a highlighted space.
pub(crate) fn line_with_cursor(value: &str, cursor: usize, cursor_style: Style) -> Line<'static> {
    let before: String = value.chars().take(cursor).collect();
    let mut rest = value.chars().skip(cursor);
    let cursor_char = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
    let after: String = rest.collect();

    Line::from(vec![
        Span::raw(before),
        Span::styled(cursor_char, cursor_style),
        Span::raw(after),
    ])
}

/// Search bar widget.
///
/// Always visible; shows the live term, with a cursor while focused.
pub struct SearchInput<'a> {
    input: &'a TextInput,
    focused: bool,
    styles: &'a RosterStyles,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(input: &'a TextInput, focused: bool, styles: &'a RosterStyles) -> Self {
        Self {
            input,
            focused,
            styles,
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.focused {
            line_with_cursor(self.input.value(), self.input.cursor(), self.styles.text_cursor)
        } else if self.input.value().is_empty() {
            Line::from(Span::styled(PLACEHOLDER, self.styles.muted))
        } else {
            Line::from(self.input.value().to_string())
        };

        let mut block = Block::default().borders(Borders::ALL).title(" Search ");
        if self.focused {
            block = block.border_style(self.styles.focused_border);
        }

        Paragraph::new(line).block(block).render(area, buf);
    }
}
