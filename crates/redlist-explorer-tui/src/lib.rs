//! redlist-explorer-tui: Terminal UI for browsing species by region
//!
//! Built on ratatui with the component pattern: each view handles its own
//! keys, returns [`action::Action`]s, and renders itself. Network work runs
//! on tokio tasks that report back through a channel drained by [`App`].

pub mod action;
pub mod app;
pub mod components;
pub mod fetcher;
pub mod tui;
pub mod ui_ext;

pub use app::App;
