//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::config::keybindings::KeyBindings;
use crate::integration;
use crate::model::{LoadError, Record};
use crate::source::{file, LoadOutcome};
use crate::state::{AppState, PageSize};
use crate::view::{TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::Path;
use std::sync::mpsc::{self, Sender};

/// Fixture with 25 members, three of them admins.
pub const MEMBERS_FIXTURE: &str = "tests/fixtures/members.json";

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Empty trailing lines are removed to keep snapshots clean.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Load the JSON fixture at `path` with default terminal size (100x24)
    /// and the default page size.
    pub fn from_fixture(path: &str) -> Result<Self, TuiError> {
        let outcome = file::read_records(Path::new(path));
        Self::with_outcome(outcome, PageSize::default(), 100, 24)
    }

    /// Start from an in-memory record list.
    pub fn from_records(records: Vec<Record>, page_size: PageSize) -> Result<Self, TuiError> {
        Self::with_outcome(Ok(records), page_size, 100, 24)
    }

    /// Start from a finished load outcome, successful or not.
    pub fn with_outcome(
        outcome: Result<Vec<Record>, LoadError>,
        page_size: PageSize,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;

        let mut app_state = AppState::new(page_size);
        integration::apply_load_outcome(&mut app_state, outcome);

        let app = TuiApp::new_for_test(terminal, app_state, None, KeyBindings::default());

        Ok(Self { app, running: true })
    }

    /// Start with the load still in flight.
    ///
    /// Returns the sender standing in for the loader thread.
    pub fn pending(
        page_size: PageSize,
        width: u16,
        height: u16,
    ) -> Result<(Self, Sender<LoadOutcome>), TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let (tx, rx) = mpsc::channel();

        let app = TuiApp::new_for_test(
            terminal,
            AppState::new(page_size),
            Some(rx),
            KeyBindings::default(),
        );

        Ok((Self { app, running: true }, tx))
    }

    /// Deliver a pending load outcome, as the event loop timer tick does.
    ///
    /// Returns true if the state changed.
    pub fn tick(&mut self) -> bool {
        self.app.poll_load_test()
    }

    /// Send a single key event
    ///
    /// Returns true if app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));

        if quit {
            self.running = false;
        }

        quit
    }

    /// Send a sequence of keys, stopping early if the app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text (sends individual character key events)
    ///
    /// Useful for the search bar and the edit row.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running (didn't quit)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
