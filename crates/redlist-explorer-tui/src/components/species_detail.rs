//! Species detail component
//!
//! Shows one record from the current page. No extra fetch is made.

use crate::action::Action;
use crate::components::Component;
use crate::ui_ext::badge_span;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use redlist_explorer_core::Classifications;
use redlist_rs::SpeciesRecord;
use std::sync::Arc;

pub struct SpeciesDetailComponent {
    record: SpeciesRecord,
    region: String,
    tables: Arc<Classifications>,
}

impl SpeciesDetailComponent {
    pub fn new(record: SpeciesRecord, region: impl Into<String>, tables: Arc<Classifications>) -> Self {
        Self {
            record,
            region: region.into(),
            tables,
        }
    }

    pub fn record(&self) -> &SpeciesRecord {
        &self.record
    }

    fn field(name: &str, value: Span<'static>) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("  {:<17}", name),
                Style::default().add_modifier(Modifier::DIM),
            ),
            value,
        ])
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let badge = self.tables.category_badge(&self.record.category);
        vec![
            Line::from(""),
            Self::field("Taxon ID:", Span::raw(self.record.taxon_id.to_string())),
            Self::field(
                "Scientific Name:",
                Span::styled(
                    self.record.scientific_name.clone(),
                    Style::default().add_modifier(Modifier::ITALIC),
                ),
            ),
            Self::field(
                "Class:",
                Span::raw(self.tables.class_display(&self.record.class_name)),
            ),
            Self::field("Category:", badge_span(&badge)),
            Self::field("Region:", Span::raw(self.region.clone())),
        ]
    }
}

impl Component for SpeciesDetailComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Backspace => Ok(Some(Action::Back)),
            _ => Ok(None),
        }
    }

    fn update(&mut self, _action: Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::vertical([
            Constraint::Min(0),    // Fields
            Constraint::Length(1), // Footer
        ])
        .split(area);

        let block = Block::default()
            .title(format!(" {} ", self.record.scientific_name))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(self.lines()).block(block), chunks[0]);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("[q]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" back"),
        ]));
        frame.render_widget(footer, chunks[1]);

        Ok(())
    }
}
