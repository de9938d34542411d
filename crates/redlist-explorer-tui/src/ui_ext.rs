//! UI extensions for redlist-explorer-core types
//!
//! Bridges the UI-agnostic core types to ratatui colors and spans.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};
use redlist_explorer_core::{BadgeColor, CategoryBadge, LoadStatus};

/// Extension trait for BadgeColor to provide ratatui colors
pub trait BadgeColorExt {
    fn color(&self) -> Color;
}

impl BadgeColorExt for BadgeColor {
    fn color(&self) -> Color {
        match self {
            BadgeColor::Black => Color::DarkGray,
            BadgeColor::Violet => Color::Magenta,
            BadgeColor::Red => Color::Red,
            BadgeColor::Orange => Color::LightRed,
            BadgeColor::Yellow => Color::Yellow,
            BadgeColor::Lime => Color::LightGreen,
            BadgeColor::Green => Color::Green,
            BadgeColor::Blue => Color::Blue,
            BadgeColor::Gray => Color::Gray,
        }
    }
}

/// Render a category badge as an outlined label
pub fn badge_span(badge: &CategoryBadge) -> Span<'static> {
    let style = Style::default().fg(badge.color.color());
    let style = if badge.known {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    };
    Span::styled(format!("[{}]", badge.label), style)
}

/// Extension trait for LoadStatus to provide a header color
pub trait LoadStatusExt {
    fn color(&self) -> Color;
}

impl<T> LoadStatusExt for LoadStatus<'_, T> {
    fn color(&self) -> Color {
        match self {
            LoadStatus::Idle => Color::DarkGray,
            LoadStatus::Loading => Color::Cyan,
            LoadStatus::Error(_) => Color::Red,
            LoadStatus::Ready(_) => Color::Green,
        }
    }
}
