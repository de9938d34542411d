//! redlist-explorer-core: Core logic for redlist-explorer
//!
//! This crate holds the state machines behind the species table and is kept
//! independent of any TUI framework so it can be unit tested without a
//! terminal.
//!
//! # Modules
//!
//! - [`async_state`] - Loading/error/data lifecycle with request generations
//! - [`loader`] - Fetch-on-change species loader with stale response handling
//! - [`query`] - Region, page, and filter selection
//! - [`pagination`] - Zero-based storage, one-based display, page strip
//! - [`classification`] - Class and category lookup tables
//! - [`region`] - Region badge description
//! - [`selection`] - Cursor over a list of items
//! - [`errors`] - Load error kinds and log formatting
//! - [`constants`] - Shared constants

pub mod async_state;
pub mod classification;
pub mod constants;
pub mod errors;
pub mod loader;
pub mod pagination;
pub mod query;
pub mod region;
pub mod selection;

// Re-export commonly used items at crate root
pub use async_state::*;
pub use classification::*;
pub use errors::*;
pub use loader::*;
pub use pagination::*;
pub use query::*;
pub use region::*;
pub use selection::*;
