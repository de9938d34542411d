//! Species table component
//!
//! Paginated, filterable table of species for one region. Owns the query
//! (page and filters) and the loader; fetches themselves are handed to the
//! app as [`Action::FetchSpecies`] and their outcomes come back through
//! [`SpeciesTableComponent::apply_result`].

use crate::action::Action;
use crate::components::selector::{FilterKind, FilterSelector, SelectorOutcome};
use crate::components::{Component, RegionComponent, centered_rect};
use crate::ui_ext::{LoadStatusExt, badge_span};
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
};
use redlist_explorer_core::constants::{MAX_PAGE_INPUT_DIGITS, PLACEHOLDER_ROWS};
use redlist_explorer_core::{
    Classifications, Generation, ListCursor, LoadError, LoadStatus, PageControl, PageSlot,
    QueryState, RegionBadge, SpeciesLoader, parse_display_page,
};
use redlist_rs::{PageResult, SpeciesQuery, SpeciesRecord};
use std::sync::Arc;

const PLACEHOLDER_CELL: &str = "░░░░░░░░";

/// Popup currently capturing keys
#[derive(Debug, Clone)]
enum Overlay {
    Selector(FilterSelector),
    /// Go-to-page prompt with the digits typed so far
    GotoPage(String),
}

pub struct SpeciesTableComponent {
    query: QueryState,
    loader: SpeciesLoader,
    tables: Arc<Classifications>,
    region: RegionComponent,
    /// Row cursor into the current page
    cursor: ListCursor,
    table_state: TableState,
    overlay: Option<Overlay>,
    /// One-shot message shown in the footer until the next key
    notice: Option<String>,
}

impl SpeciesTableComponent {
    pub fn new(query: QueryState, tables: Arc<Classifications>) -> Self {
        let region = RegionComponent::new(RegionBadge::for_region(query.region()));
        Self {
            query,
            loader: SpeciesLoader::new(),
            tables,
            region,
            cursor: ListCursor::default(),
            table_state: TableState::default(),
            overlay: None,
            notice: None,
        }
    }

    /// Issue the initial fetch
    pub fn start(&mut self) -> Option<Action> {
        self.request()
    }

    /// Re-issue the current query
    pub fn reload(&mut self) -> Option<Action> {
        self.notice = None;
        self.loader.reload().map(Action::FetchSpecies)
    }

    fn request(&mut self) -> Option<Action> {
        self.loader
            .request(self.query.query())
            .map(Action::FetchSpecies)
    }

    /// Feed a fetch outcome back in
    ///
    /// Stale outcomes are dropped. If the page count shrank below the
    /// requested page, the last page that exists is fetched instead.
    pub fn apply_result(
        &mut self,
        generation: Generation,
        outcome: Result<PageResult, LoadError>,
    ) -> Option<Action> {
        if !self.loader.complete(generation, outcome) {
            return None;
        }
        let (rows, max_pages) = self
            .loader
            .last_page()
            .map_or((0, 1), |p| (p.items.len(), p.max_pages));
        self.cursor = ListCursor::at_start(rows);

        if self.loader.status().is_ready() && self.query.page() >= max_pages {
            tracing::info!(
                "Page {} is past the end ({} pages), loading the last page",
                self.query.page() + 1,
                max_pages
            );
            return self.go_to_page(Some(max_pages - 1));
        }
        None
    }

    pub fn query(&self) -> &SpeciesQuery {
        self.query.query()
    }

    pub fn status(&self) -> LoadStatus<'_, PageResult> {
        self.loader.status()
    }

    /// Pagination for the requested page and the last known page count
    pub fn page_control(&self) -> PageControl {
        let total = self.loader.last_page().map(|p| p.max_pages).unwrap_or(1);
        PageControl::new(self.query.page(), total)
    }

    /// Rows currently on screen (empty unless ready)
    fn visible_rows(&self) -> &[SpeciesRecord] {
        match self.loader.status() {
            LoadStatus::Ready(page) => &page.items,
            _ => &[],
        }
    }

    pub fn selected_record(&self) -> Option<&SpeciesRecord> {
        self.cursor.get(self.visible_rows())
    }

    pub fn region(&self) -> &str {
        self.query.region()
    }

    pub fn classifications(&self) -> Arc<Classifications> {
        Arc::clone(&self.tables)
    }

    fn go_to_page(&mut self, page: Option<u32>) -> Option<Action> {
        let page = page?;
        if self.query.set_page(page) {
            self.request()
        } else {
            None
        }
    }

    fn set_filter(&mut self, kind: FilterKind, value: &str) -> Option<Action> {
        let changed = match kind {
            FilterKind::Category => self.query.set_category(value),
            FilterKind::Class => self.query.set_class_filter(value),
        };
        if changed { self.request() } else { None }
    }

    fn open_selector(&mut self, kind: FilterKind) {
        let (options, current) = match kind {
            FilterKind::Category => (self.tables.category_options(), self.query.category()),
            FilterKind::Class => (self.tables.class_options(), self.query.class_filter()),
        };
        let selector = FilterSelector::new(kind, options, current);
        self.overlay = Some(Overlay::Selector(selector));
    }

    /// Route a key to the open overlay
    fn handle_overlay_key(&mut self, overlay: Overlay, key: KeyEvent) -> Option<Action> {
        match overlay {
            Overlay::Selector(mut selector) => match selector.handle_key(key) {
                SelectorOutcome::Pending => {
                    self.overlay = Some(Overlay::Selector(selector));
                    None
                }
                SelectorOutcome::Cancelled => None,
                SelectorOutcome::Chosen(value) => self.set_filter(selector.kind(), &value),
            },
            Overlay::GotoPage(mut input) => match key.code {
                KeyCode::Esc => None,
                KeyCode::Enter => {
                    let control = self.page_control();
                    match parse_display_page(&input, &control) {
                        Some(index) => self.go_to_page(Some(index)),
                        None => {
                            self.notice = Some(format!(
                                "Page must be between 1 and {}",
                                control.total()
                            ));
                            None
                        }
                    }
                }
                KeyCode::Backspace => {
                    input.pop();
                    self.overlay = Some(Overlay::GotoPage(input));
                    None
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if input.len() < MAX_PAGE_INPUT_DIGITS {
                        input.push(c);
                    }
                    self.overlay = Some(Overlay::GotoPage(input));
                    None
                }
                _ => {
                    self.overlay = Some(Overlay::GotoPage(input));
                    None
                }
            },
        }
    }

    /// Draw the region badge, load status, and filter labels
    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let status = self.loader.status();
        let mut first = self.region.line();
        first.spans.push(Span::raw("  "));
        first.spans.push(Span::styled(
            self.loader.status_text(),
            Style::default().fg(status.color()),
        ));

        let second = Line::from(vec![
            Span::styled(" Category: ", Style::default().add_modifier(Modifier::DIM)),
            Span::styled(
                self.tables.category_selection_label(self.query.category()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Class: ", Style::default().add_modifier(Modifier::DIM)),
            Span::styled(
                self.tables.class_selection_label(self.query.class_filter()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);

        let para = Paragraph::new(vec![first, second]).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(para, area);
    }

    fn header_row() -> Row<'static> {
        Row::new(vec![
            Cell::from("Class"),
            Cell::from("Scientific Name"),
            Cell::from("Category"),
        ])
        .style(Style::default().add_modifier(Modifier::DIM))
        .bottom_margin(1)
    }

    fn widths() -> [Constraint; 3] {
        [
            Constraint::Percentage(30),
            Constraint::Min(20),
            Constraint::Length(26),
        ]
    }

    /// Draw the data region for the current load status
    fn draw_data(&mut self, frame: &mut Frame, area: Rect) {
        let rows: Vec<Row> = match self.loader.status() {
            LoadStatus::Idle => {
                let idle = Paragraph::new("No query issued")
                    .style(Style::default().fg(Color::DarkGray));
                frame.render_widget(idle, area);
                return;
            }
            LoadStatus::Loading => (0..PLACEHOLDER_ROWS)
                .map(|_| {
                    Row::new(vec![PLACEHOLDER_CELL; 3])
                        .style(Style::default().fg(Color::DarkGray))
                })
                .collect(),
            LoadStatus::Error(message) => {
                let error = Paragraph::new(vec![
                    Line::from(Span::styled(
                        message.to_string(),
                        Style::default().fg(Color::Red),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        "Press r to reload or change a filter",
                        Style::default().fg(Color::DarkGray),
                    )),
                ]);
                frame.render_widget(error, area);
                return;
            }
            LoadStatus::Ready(page) if page.is_empty() => {
                let empty = Paragraph::new("No species found")
                    .style(Style::default().fg(Color::DarkGray));
                frame.render_widget(empty, area);
                return;
            }
            LoadStatus::Ready(page) => page
                .items
                .iter()
                .map(|record| {
                    let badge = self.tables.category_badge(&record.category);
                    Row::new(vec![
                        Cell::from(self.tables.class_display(&record.class_name)),
                        Cell::from(Span::styled(
                            record.scientific_name.clone(),
                            Style::default().add_modifier(Modifier::ITALIC),
                        )),
                        Cell::from(badge_span(&badge)),
                    ])
                })
                .collect(),
        };

        let table = Table::new(rows, Self::widths())
            .header(Self::header_row())
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        self.table_state.select(self.cursor.index());
        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    /// Draw the page strip and "Page P of M"
    fn draw_pagination(&self, frame: &mut Frame, area: Rect) {
        let control = self.page_control();
        let mut spans = vec![Span::raw(" ")];
        for slot in control.strip() {
            match slot {
                PageSlot::Page {
                    number,
                    current: true,
                } => spans.push(Span::styled(
                    format!(" {} ", number),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                PageSlot::Page { number, .. } => spans.push(Span::raw(format!(" {} ", number))),
                PageSlot::Gap => spans.push(Span::styled(" … ", Style::default().fg(Color::DarkGray))),
            }
        }
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            control.label(),
            Style::default().add_modifier(Modifier::DIM),
        ));

        let para = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(para, area);
    }

    /// Draw the footer with keybindings, or the pending notice
    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        if let Some(notice) = &self.notice {
            let para = Paragraph::new(Span::styled(
                format!(" {}", notice),
                Style::default().fg(Color::Yellow),
            ));
            frame.render_widget(para, area);
            return;
        }

        let key = |k: &'static str| Span::styled(k, Style::default().add_modifier(Modifier::BOLD));
        let line = Line::from(vec![
            key("[j/k]"),
            Span::raw(" select  "),
            key("[Enter]"),
            Span::raw(" details  "),
            key("[h/l]"),
            Span::raw(" page  "),
            key("[g]"),
            Span::raw(" go to  "),
            key("[c]"),
            Span::raw(" category  "),
            key("[f]"),
            Span::raw(" class  "),
            key("[r]"),
            Span::raw(" reload  "),
            key("[q]"),
            Span::raw(" quit"),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn draw_goto_prompt(&self, frame: &mut Frame, area: Rect, input: &str) {
        let control = self.page_control();
        let overlay_area = centered_rect(area, 34, 3);
        frame.render_widget(Clear, overlay_area);

        let block = Block::default()
            .title(Span::styled(
                format!(" Go to page (1-{}) ", control.total()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let line = Line::from(vec![
            Span::raw(input.to_string()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), overlay_area);
    }
}

impl Component for SpeciesTableComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        self.notice = None;

        if let Some(overlay) = self.overlay.take() {
            return Ok(self.handle_overlay_key(overlay, key));
        }

        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => {
                let len = self.visible_rows().len();
                self.cursor.down(len);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let len = self.visible_rows().len();
                self.cursor.up(len);
                None
            }
            KeyCode::Enter => self
                .selected_record()
                .map(|record| Action::OpenDetail(record.taxon_id)),
            KeyCode::Char('h') | KeyCode::Left => {
                let prev = self.page_control().prev();
                self.go_to_page(prev)
            }
            KeyCode::Char('l') | KeyCode::Right => {
                let next = self.page_control().next();
                self.go_to_page(next)
            }
            KeyCode::Home => {
                let first = self.page_control().first();
                self.go_to_page(Some(first))
            }
            KeyCode::End => {
                let last = self.page_control().last();
                self.go_to_page(Some(last))
            }
            KeyCode::Char('g') => {
                self.overlay = Some(Overlay::GotoPage(String::new()));
                None
            }
            KeyCode::Char('c') => {
                self.open_selector(FilterKind::Category);
                None
            }
            KeyCode::Char('f') => {
                self.open_selector(FilterKind::Class);
                None
            }
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Refresh => Ok(self.reload()),
            _ => Ok(None),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Region + filters
            Constraint::Min(0),    // Data region
            Constraint::Length(2), // Pagination
            Constraint::Length(1), // Footer
        ])
        .split(area);

        self.draw_header(frame, chunks[0]);
        self.draw_data(frame, chunks[1]);
        self.draw_pagination(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);

        match &self.overlay {
            Some(Overlay::Selector(selector)) => selector.draw(frame, area),
            Some(Overlay::GotoPage(input)) => self.draw_goto_prompt(frame, area, input),
            None => {}
        }

        Ok(())
    }
}
