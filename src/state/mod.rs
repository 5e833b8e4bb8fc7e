//! Record browser state (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod action_handler;
pub mod app_state;
pub mod edit_session;
pub mod filter;
pub mod pagination;
pub mod selection;
pub mod store;
pub mod text_input;
pub mod view_model;

// Re-export for convenience
pub use action_handler::handle_action;
pub use app_state::{AppState, InputMode, LoadStatus};
pub use edit_session::EditSession;
pub use filter::filter_records;
pub use pagination::{navigate, paginate, Page, PageNav, PageSize};
pub use selection::Selection;
pub use store::RecordStore;
pub use text_input::{TextInput, TextKey};
pub use view_model::{PageInfo, Snapshot, ViewModel};
