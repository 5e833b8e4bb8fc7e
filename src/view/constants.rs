//! Layout dimension constants for TUI rendering.

/// Height of the search bar in lines (border + content).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the pagination bar in lines.
pub const PAGINATION_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the selection checkbox column.
pub const CHECKBOX_COLUMN_WIDTH: u16 = 3;

/// Width of the role column.
pub const ROLE_COLUMN_WIDTH: u16 = 12;

/// Most page numbers shown in the pagination bar at once.
pub const MAX_PAGE_LINKS: usize = 9;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
