//! Application state and main loop

use crate::action::Action;
use crate::components::{Component, SpeciesDetailComponent, SpeciesTableComponent};
use crate::fetcher::{AsyncResult, SpeciesFetcher};
use crate::tui::{self, Tui};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use redlist_explorer_core::{Classifications, QueryState};
use redlist_rs::SpeciesSource;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Table,
    Detail,
}

/// Main application state
pub struct App {
    /// Whether the application should quit
    should_quit: bool,
    /// Current view
    view: View,
    /// Species table for the selected region
    table: SpeciesTableComponent,
    /// Detail view (created when a row is opened)
    detail: Option<SpeciesDetailComponent>,
    /// Spawns fetches onto the runtime
    fetcher: SpeciesFetcher,
    /// Tick rate for the event poll
    tick_rate: Duration,
    /// Channel for async fetch results
    action_rx: mpsc::UnboundedReceiver<AsyncResult>,
}

impl App {
    pub fn new(
        source: Arc<dyn SpeciesSource>,
        query: QueryState,
        tables: Arc<Classifications>,
        timeout: Duration,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            should_quit: false,
            view: View::Table,
            table: SpeciesTableComponent::new(query, tables),
            detail: None,
            fetcher: SpeciesFetcher::new(source, timeout, action_tx),
            tick_rate: Duration::from_millis(100),
            action_rx,
        }
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        // Install panic hook
        tui::install_panic_hook();

        // Initialize terminal
        let mut terminal = tui::init()?;

        // Main loop
        let result = self.main_loop(&mut terminal).await;

        // Restore terminal
        tui::restore()?;

        result
    }

    /// Main event loop
    async fn main_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        // Initial fetch for the default query
        if let Some(action) = self.table.start() {
            self.handle_action(action)?;
        }

        loop {
            // Draw current view
            terminal.draw(|frame| {
                let area = frame.area();
                match self.view {
                    View::Table => {
                        let _ = self.table.draw(frame, area);
                    }
                    View::Detail => {
                        if let Some(detail) = &mut self.detail {
                            let _ = detail.draw(frame, area);
                        }
                    }
                }
            })?;

            // Handle events with timeout
            if event::poll(self.tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            self.handle_action(Action::Quit)?;
                        } else if let Some(action) = self.handle_key(key)? {
                            self.handle_action(action)?;
                        }
                    }
                    Event::Resize(w, h) => {
                        self.handle_action(Action::Resize(w, h))?;
                    }
                    _ => {}
                }
            } else {
                self.handle_action(Action::Tick)?;
            }

            // Check async results (non-blocking)
            self.drain_results()?;

            // Check if we should quit
            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: event::KeyEvent) -> Result<Option<Action>> {
        match self.view {
            View::Table => self.table.handle_key_event(key),
            View::Detail => match &mut self.detail {
                Some(detail) => detail.handle_key_event(key),
                None => Ok(Some(Action::Back)),
            },
        }
    }

    /// Apply every fetch result that has arrived so far
    fn drain_results(&mut self) -> Result<()> {
        while let Ok(result) = self.action_rx.try_recv() {
            self.apply_result(result)?;
        }
        Ok(())
    }

    fn apply_result(&mut self, result: AsyncResult) -> Result<()> {
        match result {
            AsyncResult::SpeciesLoaded {
                generation,
                outcome,
            } => {
                if let Some(next_action) = self.table.apply_result(generation, outcome) {
                    self.handle_action(next_action)?;
                }
            }
        }
        Ok(())
    }

    /// Handle an action
    fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Back => {
                self.detail = None;
                self.view = View::Table;
            }
            Action::FetchSpecies(ticket) => {
                self.fetcher.dispatch(ticket);
            }
            Action::Refresh => {
                if let Some(next_action) = self.table.update(Action::Refresh)? {
                    self.handle_action(next_action)?;
                }
            }
            Action::OpenDetail(taxon_id) => {
                let record = self
                    .table
                    .selected_record()
                    .filter(|r| r.taxon_id == taxon_id)
                    .cloned();
                match record {
                    Some(record) => {
                        tracing::debug!("Opening detail for taxon {}", taxon_id);
                        self.detail = Some(SpeciesDetailComponent::new(
                            record,
                            self.table.region(),
                            self.table.classifications(),
                        ));
                        self.view = View::Detail;
                    }
                    None => {
                        tracing::warn!("Taxon {} is no longer selected", taxon_id);
                    }
                }
            }
            Action::Tick => {
                if let Some(next_action) = self.table.update(Action::Tick)? {
                    self.handle_action(next_action)?;
                }
            }
            Action::Resize(w, h) => {
                tracing::debug!("Terminal resized to {}x{}", w, h);
            }
        }
        Ok(())
    }
}
