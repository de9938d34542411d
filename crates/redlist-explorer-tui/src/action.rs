//! Actions for the redlist-explorer TUI
//!
//! Actions represent events that can modify application state.

use redlist_explorer_core::FetchTicket;

/// Actions that can be dispatched in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Quit,
    Back,

    // Data loading
    /// Run a species fetch on the background executor
    FetchSpecies(FetchTicket),
    /// Re-issue the current query
    Refresh,

    /// Open the detail view for a taxon id
    OpenDetail(i64),

    // UI state
    Tick,
    Resize(u16, u16),
}
