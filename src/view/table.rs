//! Record table widget.
//!
//! Renders the visible page of the snapshot: a checkbox column, then name,
//! email and role. The row being edited shows the draft, with a text cursor
//! in the focused field.

use super::constants::{CHECKBOX_COLUMN_WIDTH, ROLE_COLUMN_WIDTH};
use super::search_input::line_with_cursor;
use super::styles::RosterStyles;
use crate::model::{display_role, Field, Record};
use crate::state::{AppState, InputMode, LoadStatus, Snapshot};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// Render the record table for the current page.
pub fn render_record_table(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    snapshot: &Snapshot,
    styles: &RosterStyles,
) {
    let header = header_row(snapshot, styles);
    let rows: Vec<Row> = snapshot
        .visible_records
        .iter()
        .enumerate()
        .map(|(index, record)| record_row(index, record, state, snapshot, styles))
        .collect();

    let widths = [
        Constraint::Length(CHECKBOX_COLUMN_WIDTH),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Length(ROLE_COLUMN_WIDTH),
    ];

    let block = Block::default().borders(Borders::ALL).title(" Records ");
    let inner = block.inner(area);

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);
    frame.render_widget(table, area);

    if let Some(message) = empty_message(state, snapshot) {
        let message_area = Rect {
            y: inner.y.saturating_add(1),
            height: inner.height.saturating_sub(1),
            ..inner
        };
        let paragraph = Paragraph::new(Line::from(message))
            .style(styles.muted)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, message_area);
    }
}

/// Header row. Its checkbox is checked when the selection is exactly the page.
fn header_row<'a>(snapshot: &Snapshot, styles: &RosterStyles) -> Row<'a> {
    let checkbox = if snapshot.page_selected { CHECKED } else { UNCHECKED };

    Row::new(vec![
        Cell::from(checkbox),
        Cell::from(Field::Name.label()),
        Cell::from(Field::Email.label()),
        Cell::from(Field::Role.label()),
    ])
    .style(styles.header)
}

fn record_row<'a>(
    index: usize,
    record: &Record,
    state: &AppState,
    snapshot: &Snapshot,
    styles: &RosterStyles,
) -> Row<'a> {
    let selected = snapshot.is_selected(&record.id);
    let checkbox = Cell::from(if selected { CHECKED } else { UNCHECKED });

    let draft = snapshot
        .edit_session
        .draft()
        .filter(|_| snapshot.edit_session.editing_id() == Some(&record.id));

    if let Some(draft) = draft {
        let focused = match state.mode {
            InputMode::Edit { field } => Some(field),
            _ => None,
        };
        let mut cells = vec![checkbox];
        cells.extend(Field::ALL.iter().map(|&field| {
            if focused == Some(field) {
                Cell::from(line_with_cursor(
                    state.edit_input.value(),
                    state.edit_input.cursor(),
                    styles.text_cursor,
                ))
            } else {
                Cell::from(draft.field(field).to_string())
            }
        }));
        return Row::new(cells).style(styles.editing_row);
    }

    let mut style = Style::default();
    if selected {
        style = style.patch(styles.selected_row);
    }
    if index == state.cursor_row
        && matches!(state.mode, InputMode::Browse | InputMode::PageNumber)
    {
        style = style.patch(styles.cursor_row);
    }

    Row::new(vec![
        checkbox,
        Cell::from(record.name.clone()),
        Cell::from(record.email.clone()),
        Cell::from(display_role(&record.role)),
    ])
    .style(style)
}

/// Text shown in place of rows when the page is empty.
fn empty_message(state: &AppState, snapshot: &Snapshot) -> Option<String> {
    if !snapshot.visible_records.is_empty() {
        return None;
    }

    let message = match &state.load_status {
        LoadStatus::Loading => "Loading records…".to_string(),
        LoadStatus::Failed { .. } => "No records: the load failed".to_string(),
        LoadStatus::Loaded { .. } if snapshot.page_info.total == 0 => "No records".to_string(),
        LoadStatus::Loaded { .. } => format!(
            "No records match \"{}\"",
            state.view_model().search_term()
        ),
    };
    Some(message)
}
