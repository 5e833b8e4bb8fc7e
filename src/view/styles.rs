//! Table and chrome styling.
//!
//! Every widget takes its styles from one `RosterStyles` value, so
//! `--no-color` / `NO_COLOR` only has to be decided once.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Fixed configuration, independent of the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== RosterStyles =====

/// Styles for every visual state the browser distinguishes.
///
/// Without colors, states stay distinguishable through modifiers
/// (reverse video for the cursor, bold for selection, dim for disabled).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterStyles {
    /// Table header row.
    pub header: Style,
    /// Row under the cursor.
    pub cursor_row: Style,
    /// Selected rows.
    pub selected_row: Style,
    /// Row being edited inline.
    pub editing_row: Style,
    /// Text cursor inside an input.
    pub text_cursor: Style,
    /// Current page number.
    pub active_page: Style,
    /// Other page numbers and enabled arrows.
    pub page_link: Style,
    /// Disabled arrows and buttons.
    pub disabled: Style,
    /// Border of the focused input.
    pub focused_border: Style,
    /// Status bar text while loading.
    pub status_loading: Style,
    /// Status bar text after a successful load.
    pub status_ok: Style,
    /// Status bar text after a failed load.
    pub status_error: Style,
    /// Secondary text such as key hints.
    pub muted: Style,
}

impl RosterStyles {
    /// Build styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                header: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                cursor_row: Style::default().bg(Color::DarkGray),
                selected_row: Style::default().fg(Color::Yellow),
                editing_row: Style::default().bg(Color::Blue),
                text_cursor: Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                active_page: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                page_link: Style::default().fg(Color::White),
                disabled: Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
                focused_border: Style::default().fg(Color::Yellow),
                status_loading: Style::default().fg(Color::Yellow),
                status_ok: Style::default().fg(Color::Green),
                status_error: Style::default().fg(Color::Red),
                muted: Style::default().fg(Color::Gray),
            }
        } else {
            Self {
                header: Style::default().add_modifier(Modifier::BOLD),
                cursor_row: Style::default().add_modifier(Modifier::REVERSED),
                selected_row: Style::default().add_modifier(Modifier::BOLD),
                editing_row: Style::default().add_modifier(Modifier::UNDERLINED),
                text_cursor: Style::default().add_modifier(Modifier::REVERSED),
                active_page: Style::default().add_modifier(Modifier::REVERSED),
                page_link: Style::default(),
                disabled: Style::default().add_modifier(Modifier::DIM),
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                status_loading: Style::default(),
                status_ok: Style::default(),
                status_error: Style::default().add_modifier(Modifier::BOLD),
                muted: Style::default(),
            }
        }
    }
}

impl Default for RosterStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
