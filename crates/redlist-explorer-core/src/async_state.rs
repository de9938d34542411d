//! Async component state management
//!
//! Tracks the loading/error/data lifecycle of a fetch-backed component and
//! tags every request with a generation so that late responses from
//! superseded requests can be dropped.

use std::time::Instant;

/// Monotonically increasing request tag
pub type Generation = u64;

/// Observable status of an [`AsyncState`]
#[derive(Debug, PartialEq, Eq)]
pub enum LoadStatus<'a, T> {
    /// No request has been issued yet
    Idle,
    /// A request is in flight
    Loading,
    /// The latest request failed
    Error(&'a str),
    /// The latest request succeeded
    Ready(&'a T),
}

impl<T> Clone for LoadStatus<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LoadStatus<'_, T> {}

impl<T> LoadStatus<'_, T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadStatus::Error(_))
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadStatus::Ready(_))
    }
}

/// Shared state for async-loading components
///
/// # Examples
///
/// ```
/// use redlist_explorer_core::async_state::{AsyncState, LoadStatus};
///
/// let mut state: AsyncState<Vec<String>> = AsyncState::idle();
///
/// let first = state.begin();
/// let second = state.begin();
/// assert!(state.is_loading());
///
/// // The newer request lands first
/// assert!(state.resolve(second, vec!["new".to_string()]));
/// // The older one arrives late and is ignored
/// assert!(!state.resolve(first, vec!["old".to_string()]));
///
/// assert_eq!(state.status(), LoadStatus::Ready(&vec!["new".to_string()]));
/// ```
#[derive(Debug, Clone)]
pub struct AsyncState<T> {
    /// The last successfully loaded data
    data: Option<T>,
    /// Whether the latest request is still in flight
    loading: bool,
    /// Error message if the latest request failed
    error: Option<String>,
    /// When data was last successfully loaded
    last_refresh: Option<Instant>,
    /// Generation of the most recently issued request (0 = none)
    generation: Generation,
}

impl<T> Default for AsyncState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> AsyncState<T> {
    /// Create a new async state that has not issued anything yet
    pub fn idle() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            last_refresh: None,
            generation: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Get the last successfully loaded data, even while loading or after an error
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn last_refresh(&self) -> Option<Instant> {
        self.last_refresh
    }

    /// Generation of the most recently issued request
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Check whether a generation belongs to the latest request
    pub fn is_current(&self, generation: Generation) -> bool {
        generation != 0 && generation == self.generation
    }

    /// Issue a new request and return its generation
    ///
    /// Any request issued earlier becomes stale. Existing data is kept so
    /// pagination metadata stays available while loading.
    pub fn begin(&mut self) -> Generation {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Apply a successful result if it belongs to the latest request
    ///
    /// Returns false (and changes nothing) for stale generations.
    pub fn resolve(&mut self, generation: Generation, data: T) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.data = Some(data);
        self.loading = false;
        self.error = None;
        self.last_refresh = Some(Instant::now());
        true
    }

    /// Apply a failure if it belongs to the latest request
    ///
    /// Returns false (and changes nothing) for stale generations.
    pub fn reject(&mut self, generation: Generation, error: impl ToString) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.error = Some(error.to_string());
        self.loading = false;
        true
    }

    /// Current status, loading taking precedence over error and data
    pub fn status(&self) -> LoadStatus<'_, T> {
        if self.loading {
            LoadStatus::Loading
        } else if let Some(error) = &self.error {
            LoadStatus::Error(error.as_str())
        } else if let Some(data) = &self.data {
            LoadStatus::Ready(data)
        } else {
            LoadStatus::Idle
        }
    }

    /// Short status label for headers and footers
    pub fn status_text(&self) -> &'static str {
        match self.status() {
            LoadStatus::Idle => "Idle",
            LoadStatus::Loading if self.data.is_none() => "Loading...",
            LoadStatus::Loading => "Refreshing...",
            LoadStatus::Error(_) => "Error",
            LoadStatus::Ready(_) => "Ready",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_state() {
        let mut state: AsyncState<String> = AsyncState::idle();
        state.begin();
        assert!(state.is_loading());
        assert!(!state.has_error());
        assert!(state.data().is_none());
        assert_eq!(state.status(), LoadStatus::Loading);
    }

    #[test]
    fn test_idle_state() {
        let state: AsyncState<String> = AsyncState::idle();
        assert_eq!(state.status(), LoadStatus::Idle);
        assert_eq!(state.generation(), 0);
        assert!(!state.is_current(0));
    }

    #[test]
    fn test_resolve_current() {
        let mut state: AsyncState<i32> = AsyncState::idle();
        let generation = state.begin();
        assert!(state.resolve(generation, 42));

        assert!(!state.is_loading());
        assert_eq!(state.data(), Some(&42));
        assert!(state.last_refresh().is_some());
        assert_eq!(state.status(), LoadStatus::Ready(&42));
    }

    #[test]
    fn test_reject_current() {
        let mut state: AsyncState<i32> = AsyncState::idle();
        let generation = state.begin();
        assert!(state.reject(generation, "Connection failed"));

        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("Connection failed"));
        assert_eq!(state.status(), LoadStatus::Error("Connection failed"));
    }

    #[test]
    fn test_stale_responses_are_ignored() {
        let mut state: AsyncState<&str> = AsyncState::idle();
        let a = state.begin();
        let b = state.begin();

        assert!(state.resolve(b, "b"));
        assert!(!state.resolve(a, "a"));
        assert!(!state.reject(a, "late failure"));

        assert_eq!(state.status(), LoadStatus::Ready(&"b"));
    }

    #[test]
    fn test_stale_response_does_not_end_loading() {
        let mut state: AsyncState<&str> = AsyncState::idle();
        let a = state.begin();
        let _b = state.begin();

        assert!(!state.resolve(a, "a"));
        assert!(state.is_loading());
        assert!(state.data().is_none());
    }

    #[test]
    fn test_preserves_data_across_error_and_loading() {
        let mut state: AsyncState<i32> = AsyncState::idle();
        let first = state.begin();
        state.resolve(first, 42);

        let second = state.begin();
        assert_eq!(state.status(), LoadStatus::Loading);
        assert_eq!(state.data(), Some(&42));

        state.reject(second, "Refresh failed");
        assert_eq!(state.data(), Some(&42));
        assert!(state.status().is_error());

        let third = state.begin();
        state.resolve(third, 7);
        assert_eq!(state.error(), None);
        assert_eq!(state.status(), LoadStatus::Ready(&7));
    }

    #[test]
    fn test_status_text() {
        let mut state: AsyncState<i32> = AsyncState::idle();
        assert_eq!(state.status_text(), "Idle");

        let g = state.begin();
        assert_eq!(state.status_text(), "Loading...");

        state.resolve(g, 1);
        assert_eq!(state.status_text(), "Ready");

        let g = state.begin();
        assert_eq!(state.status_text(), "Refreshing...");

        state.reject(g, "Failed");
        assert_eq!(state.status_text(), "Error");
    }
}
