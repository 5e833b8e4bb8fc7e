//! TUI rendering and event handling (impure shell).

pub mod constants;
mod help;
mod layout;
mod pagination;
mod search_input;
mod styles;
mod table;

pub use help::render_help_overlay;
pub use pagination::{page_window, pagination_line};
pub use search_input::SearchInput;
pub use styles::{ColorConfig, RosterStyles};

use crate::config::keybindings::KeyBindings;
use crate::integration;
use crate::model::KeyAction;
use crate::source::{self, LoadOutcome, RecordSource};
use crate::state::action_handler::{
    cancel_edit, cancel_page, cancel_search, handle_action, handle_edit_key, handle_page_key,
    handle_search_key, next_edit_field, prev_edit_field, save_edit, submit_page, submit_search,
};
use crate::state::{AppState, InputMode, LoadStatus, PageSize, TextKey};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: RosterStyles,
    /// Initial load still in flight; dropped once its outcome is applied.
    pending_load: Option<Receiver<LoadOutcome>>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        app_state: AppState,
        pending_load: Receiver<LoadOutcome>,
        styles: RosterStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles,
            pending_load: Some(pending_load),
        })
    }

    /// Run the main event loop
    ///
    /// Returns when the operator quits (q or Ctrl+C). Redraws after every
    /// key or resize, and on the timer tick that delivers the load outcome.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TIMER_INTERVAL: Duration = Duration::from_millis(200);

        self.draw()?;

        loop {
            if event::poll(TIMER_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => self.draw()?,
                    _ => {}
                }
            }

            if self.poll_load() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Apply the load outcome if it has arrived.
    ///
    /// Returns true if the state changed and a redraw is needed.
    fn poll_load(&mut self) -> bool {
        let Some(receiver) = &self.pending_load else {
            return false;
        };

        match receiver.try_recv() {
            Ok(outcome) => {
                integration::apply_load_outcome(&mut self.app_state, outcome);
                self.pending_load = None;
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                warn!("Loader thread exited without reporting an outcome");
                self.app_state.load_status = LoadStatus::Failed {
                    reason: "loader stopped unexpectedly".to_string(),
                };
                self.pending_load = None;
                true
            }
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.help_visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.app_state.help_visible = false;
            }
            return false;
        }

        match self.app_state.mode {
            InputMode::Search => {
                self.handle_search_mode_key(key);
                false
            }
            InputMode::Edit { .. } => {
                self.handle_edit_mode_key(key);
                false
            }
            InputMode::PageNumber => {
                self.handle_page_mode_key(key);
                false
            }
            InputMode::Browse => self.handle_browse_mode_key(key),
        }
    }

    fn handle_search_mode_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => cancel_search(&mut self.app_state),
            KeyCode::Enter => submit_search(&mut self.app_state),
            _ => {
                if let Some(text_key) = text_key(key) {
                    handle_search_key(&mut self.app_state, text_key);
                }
            }
        }
    }

    fn handle_edit_mode_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => cancel_edit(&mut self.app_state),
            KeyCode::Enter => save_edit(&mut self.app_state),
            KeyCode::Tab => next_edit_field(&mut self.app_state),
            KeyCode::BackTab => prev_edit_field(&mut self.app_state),
            _ => {
                if let Some(text_key) = text_key(key) {
                    handle_edit_key(&mut self.app_state, text_key);
                }
            }
        }
    }

    fn handle_page_mode_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => cancel_page(&mut self.app_state),
            KeyCode::Enter => submit_page(&mut self.app_state),
            _ => {
                if let Some(text_key) = text_key(key) {
                    handle_page_key(&mut self.app_state, text_key);
                }
            }
        }
    }

    fn handle_browse_mode_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.lookup_action(key) else {
            debug!(?key, "Unbound key");
            return false;
        };

        if action == KeyAction::Quit {
            info!("Quit requested");
            return true;
        }

        handle_action(&mut self.app_state, action);
        false
    }

    /// Resolve a key through the bindings.
    ///
    /// Terminals disagree on whether shifted symbols like `?` carry SHIFT,
    /// so a shifted character falls back to its unmodified binding.
    fn lookup_action(&self, key: KeyEvent) -> Option<KeyAction> {
        let normalized = KeyEvent::new(key.code, key.modifiers);
        self.key_bindings.get(normalized).or_else(|| {
            match key.code {
                KeyCode::Char(_) if key.modifiers == KeyModifiers::SHIFT => self
                    .key_bindings
                    .get(KeyEvent::new(key.code, KeyModifiers::NONE)),
                KeyCode::Char(ch) if ch.is_ascii_uppercase() && key.modifiers.is_empty() => self
                    .key_bindings
                    .get(KeyEvent::new(key.code, KeyModifiers::SHIFT)),
                _ => None,
            }
        })
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, styles);
        })?;
        Ok(())
    }
}

/// Map a key to a text-editing operation, if it is one.
///
/// Control and Alt chords are never treated as typed characters.
fn text_key(key: KeyEvent) -> Option<TextKey> {
    match key.code {
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(TextKey::Char(ch))
        }
        KeyCode::Backspace => Some(TextKey::Backspace),
        KeyCode::Delete => Some(TextKey::Delete),
        KeyCode::Left => Some(TextKey::Left),
        KeyCode::Right => Some(TextKey::Right),
        KeyCode::Home => Some(TextKey::Home),
        KeyCode::End => Some(TextKey::End),
        _ => None,
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without touching the real terminal.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        pending_load: Option<Receiver<LoadOutcome>>,
        key_bindings: KeyBindings,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            styles: RosterStyles::with_color_config(ColorConfig::new(false)),
            pending_load,
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Poll the pending load once (test-only accessor)
    pub(crate) fn poll_load_test(&mut self) -> bool {
        self.poll_load()
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Run options carried from the resolved configuration into the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Records per page.
    pub page_size: PageSize,
    /// Timeout for the initial HTTP fetch.
    pub request_timeout: Duration,
    /// Search term to apply on startup (`--search`).
    pub search: Option<String>,
    /// Disable colors (`--no-color`).
    pub no_color: bool,
}

/// Initialize and run the TUI application for a record source.
///
/// Starts the background load, sets up the terminal, runs the event loop,
/// and always restores the terminal on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(record_source: RecordSource, args: CliArgs) -> Result<(), TuiError> {
    let pending_load = source::spawn_load(record_source, args.request_timeout);

    let mut app_state = AppState::new(args.page_size);
    if let Some(term) = &args.search {
        integration::apply_initial_search(&mut app_state, term);
    }

    let styles = RosterStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));

    let mut app = match TuiApp::new(app_state, pending_load, styles) {
        Ok(app) => app,
        Err(err) => {
            let _ = restore_terminal();
            return Err(err);
        }
    };

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
