//! Pagination bar widget.
//!
//! Left side: the bulk-delete hint with the selection count. Right side:
//! `« ‹ 1 2 3 › »` with the current page highlighted and arrows dimmed when
//! they cannot move.

use super::constants::MAX_PAGE_LINKS;
use super::styles::RosterStyles;
use crate::state::PageInfo;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::ops::RangeInclusive;

/// Page numbers to show, centred on `current` and at most `max_links` wide.
pub fn page_window(current: usize, page_count: usize, max_links: usize) -> RangeInclusive<usize> {
    let page_count = page_count.max(1);
    let width = max_links.clamp(1, page_count);
    let highest_start = page_count - width + 1;
    let start = current
        .saturating_sub(width / 2)
        .clamp(1, highest_start);
    start..=start + width - 1
}

/// Build the `« ‹ pages › »` line.
pub fn pagination_line(page_info: &PageInfo, styles: &RosterStyles) -> Line<'static> {
    let back = if page_info.has_previous() {
        styles.page_link
    } else {
        styles.disabled
    };
    let forward = if page_info.has_next() {
        styles.page_link
    } else {
        styles.disabled
    };

    let window = page_window(page_info.current_page, page_info.page_count, MAX_PAGE_LINKS);
    let mut spans = vec![Span::styled(" « ", back), Span::styled(" ‹ ", back)];

    if *window.start() > 1 {
        spans.push(Span::styled("…", styles.muted));
    }
    for page in window.clone() {
        let style = if page == page_info.current_page {
            styles.active_page
        } else {
            styles.page_link
        };
        spans.push(Span::styled(format!(" {} ", page), style));
    }
    if *window.end() < page_info.page_count {
        spans.push(Span::styled("…", styles.muted));
    }

    spans.push(Span::styled(" › ", forward));
    spans.push(Span::styled(" » ", forward));
    Line::from(spans)
}

/// Render the pagination bar.
pub fn render_pagination_bar(
    frame: &mut Frame,
    area: Rect,
    page_info: &PageInfo,
    selected_count: usize,
    styles: &RosterStyles,
) {
    let pages = pagination_line(page_info, styles);
    let pages_width = u16::try_from(pages.width()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(pages_width)])
        .split(area);

    let delete_style = if selected_count == 0 {
        styles.disabled
    } else {
        styles.status_error
    };
    let delete_hint = Line::from(Span::styled(
        format!(" D: Delete selected ({})", selected_count),
        delete_style,
    ));

    frame.render_widget(Paragraph::new(delete_hint), chunks[0]);
    frame.render_widget(
        Paragraph::new(pages).alignment(Alignment::Right),
        chunks[1],
    );
}
