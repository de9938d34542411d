//! Shared constants for the species browser

/// Number of placeholder rows rendered while a page is loading
pub const PLACEHOLDER_ROWS: usize = 4;

/// Label of the synthetic "no filter" selector entry
pub const ALL_LABEL: &str = "All";

/// Pages shown on each side of the current page in the page strip
pub const PAGE_STRIP_SIBLINGS: u32 = 1;

/// Pages always shown at each end of the page strip
pub const PAGE_STRIP_BOUNDARIES: u32 = 1;

/// Default log file for the TUI
pub const DEFAULT_LOG_FILE: &str = "/tmp/redlist-explorer.log";

/// Maximum digits accepted by the go-to-page prompt
pub const MAX_PAGE_INPUT_DIGITS: usize = 6;
