//! Region badge component

use crate::action::Action;
use crate::components::Component;
use color_eyre::Result;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use redlist_explorer_core::RegionBadge;

/// Read-only display of the region a table is scoped to
#[derive(Debug, Clone)]
pub struct RegionComponent {
    badge: RegionBadge,
}

impl RegionComponent {
    pub fn new(badge: RegionBadge) -> Self {
        Self { badge }
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.badge.name),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ];
        if self.badge.identifier != self.badge.name {
            spans.push(Span::styled(
                format!("{} ", self.badge.identifier),
                Style::default().fg(Color::Cyan),
            ));
        }
        spans.push(Span::styled(
            self.badge.image_path.clone(),
            Style::default().add_modifier(Modifier::DIM),
        ));
        if self.badge.readonly {
            spans.push(Span::styled(
                " (read-only)",
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
        Line::from(spans)
    }
}

impl Component for RegionComponent {
    fn update(&mut self, _action: Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Paragraph::new(self.line()), area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_shows_region_and_image() {
        let component = RegionComponent::new(RegionBadge::for_region("AF"));
        let text: String = component
            .line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains(" AF "));
        assert!(text.contains("/AF.png"));
        assert!(text.contains("read-only"));
    }
}
