//! Species data loader
//!
//! Decides when a fetch must be issued and which completions may be shown.
//! The loader itself performs no I/O: [`SpeciesLoader::request`] hands back a
//! [`FetchTicket`] that the caller executes, and the outcome is fed back
//! through [`SpeciesLoader::complete`].

use crate::async_state::{AsyncState, Generation, LoadStatus};
use crate::errors::LoadError;
use redlist_rs::{PageResult, SpeciesQuery};

/// A fetch the caller must execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: Generation,
    pub query: SpeciesQuery,
}

/// Fetch-on-change loader for species pages
///
/// # Examples
///
/// ```
/// use redlist_explorer_core::loader::SpeciesLoader;
/// use redlist_rs::{PageResult, SpeciesQuery};
///
/// let mut loader = SpeciesLoader::new();
/// let query = SpeciesQuery::new("AF");
///
/// let ticket = loader.request(&query).expect("first request fetches");
/// assert!(loader.request(&query).is_none()); // unchanged inputs
///
/// loader.complete(ticket.generation, Ok(PageResult::default()));
/// assert!(loader.status().is_ready());
/// ```
#[derive(Debug, Default)]
pub struct SpeciesLoader {
    state: AsyncState<PageResult>,
    /// Query of the most recently issued request
    last_query: Option<SpeciesQuery>,
}

impl SpeciesLoader {
    pub fn new() -> Self {
        Self {
            state: AsyncState::idle(),
            last_query: None,
        }
    }

    /// Issue a fetch if the query differs from the last one issued
    pub fn request(&mut self, query: &SpeciesQuery) -> Option<FetchTicket> {
        if self.last_query.as_ref() == Some(query) {
            tracing::debug!("Query unchanged, not refetching: {:?}", query);
            return None;
        }
        Some(self.issue(query.clone()))
    }

    /// Re-issue the last query under a new generation
    ///
    /// Returns None if nothing has been requested yet.
    pub fn reload(&mut self) -> Option<FetchTicket> {
        let query = self.last_query.clone()?;
        Some(self.issue(query))
    }

    fn issue(&mut self, query: SpeciesQuery) -> FetchTicket {
        let generation = self.state.begin();
        tracing::info!(
            "Fetching species #{}: region={} page={} category={} class={}",
            generation,
            query.region,
            query.page,
            query.category,
            query.class_filter
        );
        self.last_query = Some(query.clone());
        FetchTicket { generation, query }
    }

    /// Apply a fetch outcome
    ///
    /// Returns true if it was applied, false if it belonged to a superseded
    /// request and was discarded.
    pub fn complete(
        &mut self,
        generation: Generation,
        outcome: Result<PageResult, LoadError>,
    ) -> bool {
        let applied = match outcome {
            Ok(page) => {
                let count = page.items.len();
                let applied = self.state.resolve(generation, page);
                if applied {
                    tracing::info!("Loaded {} species (request #{})", count, generation);
                }
                applied
            }
            Err(error) => self.state.reject(generation, error.message()),
        };

        if !applied {
            tracing::debug!(
                "Discarding stale response #{} (latest is #{})",
                generation,
                self.state.generation()
            );
        }
        applied
    }

    pub fn status(&self) -> LoadStatus<'_, PageResult> {
        self.state.status()
    }

    /// Last successfully loaded page, kept while loading or after an error
    pub fn last_page(&self) -> Option<&PageResult> {
        self.state.data()
    }

    pub fn status_text(&self) -> &'static str {
        self.state.status_text()
    }
}
