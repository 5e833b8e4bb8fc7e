//! Screen layout rendering.
//!
//! Top to bottom: search bar, record table, pagination bar, status bar.
//! The help overlay is drawn over everything when visible.

use super::constants::{PAGINATION_BAR_HEIGHT, SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use super::help::render_help_overlay;
use super::pagination::render_pagination_bar;
use super::search_input::{line_with_cursor, SearchInput};
use super::styles::RosterStyles;
use super::table::render_record_table;
use crate::state::{AppState, InputMode, LoadStatus, Snapshot};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the full screen for the current state.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &RosterStyles) {
    let snapshot = state.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(PAGINATION_BAR_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    frame.render_widget(
        SearchInput::new(&state.search_input, state.mode == InputMode::Search, styles),
        chunks[0],
    );
    render_record_table(frame, chunks[1], state, &snapshot, styles);
    render_pagination_bar(
        frame,
        chunks[2],
        &snapshot.page_info,
        state.view_model().selection().len(),
        styles,
    );
    render_status_bar(frame, chunks[3], state, &snapshot, styles);

    if state.help_visible {
        render_help_overlay(frame, styles);
    }
}

/// Load status and counts, with the style matching the load outcome.
fn build_status_text(state: &AppState, snapshot: &Snapshot, styles: &RosterStyles) -> (String, Style) {
    match &state.load_status {
        LoadStatus::Loading => ("Loading records…".to_string(), styles.status_loading),
        LoadStatus::Failed { reason } => (format!("Load failed: {}", reason), styles.status_error),
        LoadStatus::Loaded { .. } => {
            let info = &snapshot.page_info;
            let mut text = format!(
                "Page {}/{} · {} of {} records",
                info.current_page, info.page_count, info.matching, info.total
            );
            let selected = state.view_model().selection().len();
            if selected > 0 {
                text.push_str(&format!(" · {} selected", selected));
            }
            (text, styles.status_ok)
        }
    }
}

/// Context-sensitive keyboard hints for the current input mode.
fn build_keyboard_hints(mode: InputMode) -> String {
    match mode {
        InputMode::Browse => "/ search · space select · e edit · d delete · ? help · q quit ".to_string(),
        InputMode::Search => "Enter keep · Esc clear ".to_string(),
        InputMode::Edit { field } => format!(
            "Editing {} · Tab next field · Enter save · Esc cancel ",
            field.label()
        ),
        InputMode::PageNumber => "Enter go · Esc cancel ".to_string(),
    }
}

/// Left side of the status bar: the page prompt while it is open, the load
/// status otherwise.
fn build_status_line(
    state: &AppState,
    snapshot: &Snapshot,
    styles: &RosterStyles,
) -> Line<'static> {
    if state.mode == InputMode::PageNumber {
        let prompt = format!(" Go to page (1-{}): ", snapshot.page_info.page_count);
        let input = line_with_cursor(
            state.page_input.value(),
            state.page_input.cursor(),
            styles.text_cursor,
        );
        let mut spans = vec![Span::raw(prompt)];
        spans.extend(input.spans);
        return Line::from(spans);
    }

    let (status, status_style) = build_status_text(state, snapshot, styles);
    Line::from(format!(" {}", status)).style(status_style)
}

/// Render the status bar: load status on the left, key hints on the right.
fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    snapshot: &Snapshot,
    styles: &RosterStyles,
) {
    let hints = build_keyboard_hints(state.mode);
    let hints_width = u16::try_from(hints.width()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(hints_width)])
        .split(area);

    frame.render_widget(
        Paragraph::new(build_status_line(state, snapshot, styles)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(hints))
            .style(styles.muted)
            .alignment(Alignment::Right),
        chunks[1],
    );
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
