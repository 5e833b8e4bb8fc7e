//! Pure core integration functions.
//!
//! Glue between the impure shell (background load, CLI flags) and the pure
//! state. Testable without I/O.

use crate::source::LoadOutcome;
use crate::state::{AppState, LoadStatus};
use tracing::{info, warn};

/// Install the result of the initial load into the application state.
///
/// Success replaces the store and resets the page; failure leaves the store
/// empty and records the reason for the status bar.
pub fn apply_load_outcome(state: &mut AppState, outcome: LoadOutcome) {
    match outcome {
        Ok(records) => {
            let count = records.len();
            state.view_model_mut().load(records);
            state.load_status = LoadStatus::Loaded { count };
            info!(count, "Initial load applied");
        }
        Err(err) => {
            warn!(error = %err, "Initial load failed; store stays empty");
            state.load_status = LoadStatus::Failed {
                reason: err.to_string(),
            };
        }
    }
    state.clamp_cursor();
}

/// Seed the search bar and term from a `--search` flag.
pub fn apply_initial_search(state: &mut AppState, term: &str) {
    if term.is_empty() {
        return;
    }
    state.search_input = crate::state::TextInput::from_value(term);
    state.view_model_mut().set_search_term(term);
}

/// Count of records installed, if the load has finished successfully.
pub fn loaded_count(state: &AppState) -> Option<usize> {
    match state.load_status {
        LoadStatus::Loaded { count } => Some(count),
        _ => None,
    }
}
