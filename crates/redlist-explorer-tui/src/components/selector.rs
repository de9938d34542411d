//! Filter selector popup
//!
//! A small list overlay for picking a category or class filter value.

use crate::components::centered_rect;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};
use redlist_explorer_core::{ListCursor, SelectOption};

/// Which filter a selector edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Category,
    Class,
}

impl FilterKind {
    pub fn title(&self) -> &'static str {
        match self {
            FilterKind::Category => "Select Category",
            FilterKind::Class => "Select Class Name",
        }
    }
}

/// Result of feeding a key to a selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorOutcome {
    /// Still open
    Pending,
    /// Closed without a choice
    Cancelled,
    /// Closed with the chosen option value
    Chosen(String),
}

#[derive(Debug, Clone)]
pub struct FilterSelector {
    kind: FilterKind,
    options: Vec<SelectOption>,
    cursor: ListCursor,
}

impl FilterSelector {
    /// Open a selector with the cursor on the currently active value
    pub fn new(kind: FilterKind, options: Vec<SelectOption>, current: &str) -> Self {
        let mut cursor = ListCursor::at_start(options.len());
        cursor.seek(&options, |o| o.value == current);
        Self {
            kind,
            options,
            cursor,
        }
    }

    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    pub fn highlighted(&self) -> Option<&SelectOption> {
        self.cursor.get(&self.options)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> SelectorOutcome {
        let len = self.options.len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => SelectorOutcome::Cancelled,
            KeyCode::Char('j') | KeyCode::Down => {
                self.cursor.down(len);
                SelectorOutcome::Pending
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.cursor.up(len);
                SelectorOutcome::Pending
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.cursor.first(len);
                SelectorOutcome::Pending
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.cursor.last(len);
                SelectorOutcome::Pending
            }
            KeyCode::Enter => match self.highlighted() {
                Some(option) => SelectorOutcome::Chosen(option.value.clone()),
                None => SelectorOutcome::Cancelled,
            },
            _ => SelectorOutcome::Pending,
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let widest = self
            .options
            .iter()
            .map(|o| o.label.chars().count())
            .max()
            .unwrap_or(0)
            .max(self.kind.title().len()) as u16;
        let overlay_area = centered_rect(area, widest + 8, self.options.len() as u16 + 2);

        frame.render_widget(Clear, overlay_area);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|o| ListItem::new(Line::from(o.label.clone())))
            .collect();

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.kind.title()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(self.cursor.index());
        frame.render_stateful_widget(list, overlay_area, &mut state);
    }
}
