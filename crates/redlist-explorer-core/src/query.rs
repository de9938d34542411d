//! Query state owned by the species table
//!
//! Filters and pagination are coupled: a filter change invalidates the
//! current page, so every filter transition also resets the page to 0 in a
//! single update.

use redlist_rs::SpeciesQuery;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("region must not be empty")]
    EmptyRegion,
}

/// Region, page, and filter selection for one table view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    query: SpeciesQuery,
}

impl QueryState {
    /// Start at page 0 with both filters set to "all"
    pub fn new(region: impl Into<String>) -> Result<Self, QueryError> {
        let region = region.into();
        if region.trim().is_empty() {
            return Err(QueryError::EmptyRegion);
        }
        Ok(Self {
            query: SpeciesQuery::new(region),
        })
    }

    /// The query to hand to the loader
    pub fn query(&self) -> &SpeciesQuery {
        &self.query
    }

    pub fn region(&self) -> &str {
        &self.query.region
    }

    pub fn page(&self) -> u32 {
        self.query.page
    }

    pub fn category(&self) -> &str {
        &self.query.category
    }

    pub fn class_filter(&self) -> &str {
        &self.query.class_filter
    }

    /// Move to a zero-based page. Returns true if the query changed.
    pub fn set_page(&mut self, page: u32) -> bool {
        if self.query.page == page {
            return false;
        }
        self.query.page = page;
        true
    }

    /// Select a category and reset to the first page
    ///
    /// Returns false when the category is already selected.
    pub fn set_category(&mut self, category: &str) -> bool {
        if self.query.category == category {
            return false;
        }
        self.query.category = category.to_string();
        self.query.page = 0;
        true
    }

    /// Select a class and reset to the first page
    ///
    /// Returns false when the class is already selected.
    pub fn set_class_filter(&mut self, class_filter: &str) -> bool {
        if self.query.class_filter == class_filter {
            return false;
        }
        self.query.class_filter = class_filter.to_string();
        self.query.page = 0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redlist_rs::ALL;

    #[test]
    fn test_initial_state() {
        let state = QueryState::new("AF").unwrap();
        assert_eq!(state.region(), "AF");
        assert_eq!(state.page(), 0);
        assert_eq!(state.category(), ALL);
        assert_eq!(state.class_filter(), ALL);
        assert_eq!(state.query(), &SpeciesQuery::new("AF"));
    }

    #[test]
    fn test_rejects_empty_region() {
        assert_eq!(QueryState::new("").unwrap_err(), QueryError::EmptyRegion);
        assert_eq!(QueryState::new("   ").unwrap_err(), QueryError::EmptyRegion);
    }

    #[test]
    fn test_set_page() {
        let mut state = QueryState::new("AF").unwrap();
        assert!(state.set_page(3));
        assert_eq!(state.page(), 3);
        assert!(!state.set_page(3));
    }

    #[test]
    fn test_category_change_resets_page() {
        let mut state = QueryState::new("AF").unwrap();
        state.set_page(4);

        assert!(state.set_category("EN"));
        assert_eq!(state.page(), 0);
        assert_eq!(
            state.query(),
            &SpeciesQuery::new("AF").with_category("EN")
        );
    }

    #[test]
    fn test_class_change_resets_page() {
        let mut state = QueryState::new("AF").unwrap();
        state.set_page(2);

        assert!(state.set_class_filter("AVES"));
        assert_eq!(state.page(), 0);
        assert_eq!(state.class_filter(), "AVES");
        assert_eq!(state.category(), ALL);
    }

    #[test]
    fn test_reselecting_same_filter_keeps_page() {
        let mut state = QueryState::new("AF").unwrap();
        state.set_category("EN");
        state.set_page(2);

        assert!(!state.set_category("EN"));
        assert_eq!(state.page(), 2);
    }
}
