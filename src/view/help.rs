//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::RosterStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups: (category, [(keys, description)]).
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Rows",
        &[("j/↓", "Cursor down"), ("k/↑", "Cursor up")],
    ),
    (
        "Pages",
        &[
            ("h/←/PgUp", "Previous page"),
            ("l/→/PgDn", "Next page"),
            ("g/Home", "First page"),
            ("G/End", "Last page"),
            ("1-9", "Go to page"),
            (":", "Type a page number, Enter to go"),
        ],
    ),
    (
        "Search",
        &[
            ("/", "Focus search bar"),
            ("Enter", "Keep term and leave search bar"),
            ("Esc", "Clear term and leave search bar"),
        ],
    ),
    (
        "Selection",
        &[
            ("Space", "Toggle row"),
            ("a", "Toggle all rows on page"),
            ("c", "Clear selection"),
            ("D", "Delete selected"),
        ],
    ),
    (
        "Row actions",
        &[
            ("d/Delete", "Delete row"),
            ("e/Enter", "Edit row"),
            ("Tab/S-Tab", "Next/previous field while editing"),
            ("Enter", "Save edit"),
            ("Esc", "Cancel edit"),
        ],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q/Ctrl+c", "Quit")],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &RosterStyles) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.focused_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        styles.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate a rect centered in `area` with the given percentage size.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Build the help content lines grouped by category.
fn build_help_content(styles: &RosterStyles) -> Vec<Line<'static>> {
    let key_style = styles.header;
    let mut lines = Vec::new();

    for (index, (category, shortcuts)) in SHORTCUTS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            *category,
            styles.header.add_modifier(Modifier::UNDERLINED),
        )));
        for (keys, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", keys), key_style),
                Span::raw(*description),
            ]));
        }
    }

    lines
}

// ===== Tests =====
