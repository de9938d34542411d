//! Component system for redlist-explorer TUI
//!
//! Based on the ratatui Component template pattern.

pub mod region;
pub mod selector;
pub mod species_detail;
pub mod species_table;

pub use region::RegionComponent;
pub use selector::{FilterKind, FilterSelector, SelectorOutcome};
pub use species_detail::SpeciesDetailComponent;
pub use species_table::SpeciesTableComponent;

use crate::action::Action;
use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

/// Trait for UI components
///
/// Components handle key events, update their state from actions, and
/// render themselves.
pub trait Component {
    /// Handle key events and optionally produce actions
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Update the component state based on an action
    fn update(&mut self, action: Action) -> Result<Option<Action>>;

    /// Render the component to the frame
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}

/// Centered overlay area, shrunk to fit inside `area`
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4)).max(1);
    let height = height.min(area.height.saturating_sub(2)).max(1);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
