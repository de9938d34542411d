//! Background species fetching
//!
//! Each fetch runs on its own tokio task, bounded by a timeout, and reports
//! its outcome through the app's result channel tagged with the generation
//! it was issued under. In-flight fetches are never cancelled; the loader
//! drops outcomes whose generation has been superseded.

use redlist_explorer_core::{FetchTicket, Generation, LoadError};
use redlist_rs::{PageResult, SpeciesQuery, SpeciesSource};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Results from async operations
#[derive(Debug)]
pub enum AsyncResult {
    SpeciesLoaded {
        generation: Generation,
        outcome: Result<PageResult, LoadError>,
    },
}

/// Spawns species fetches and forwards their outcomes
#[derive(Clone)]
pub struct SpeciesFetcher {
    source: Arc<dyn SpeciesSource>,
    timeout: Duration,
    tx: mpsc::UnboundedSender<AsyncResult>,
}

impl SpeciesFetcher {
    pub fn new(
        source: Arc<dyn SpeciesSource>,
        timeout: Duration,
        tx: mpsc::UnboundedSender<AsyncResult>,
    ) -> Self {
        Self {
            source,
            timeout,
            tx,
        }
    }

    /// Start the fetch for a ticket without waiting for it
    pub fn dispatch(&self, ticket: FetchTicket) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let timeout = self.timeout;

        tokio::spawn(async move {
            let outcome = fetch_page(source.as_ref(), &ticket.query, timeout).await;
            let result = AsyncResult::SpeciesLoaded {
                generation: ticket.generation,
                outcome,
            };
            if tx.send(result).is_err() {
                tracing::debug!(
                    "Result channel closed, dropping species result #{}",
                    ticket.generation
                );
            }
        })
    }
}

/// Fetch one page with a timeout, collapsing failures into [`LoadError`]
pub async fn fetch_page(
    source: &dyn SpeciesSource,
    query: &SpeciesQuery,
    timeout: Duration,
) -> Result<PageResult, LoadError> {
    match tokio::time::timeout(timeout, source.species(query)).await {
        Ok(Ok(page)) => Ok(page.normalized()),
        Ok(Err(e)) => Err(LoadError::from_fetch_error(&e)),
        Err(_) => {
            let secs = timeout_secs(timeout);
            tracing::warn!("Species fetch timed out after {}s: {:?}", secs, query);
            Err(LoadError::TimedOut { secs })
        }
    }
}

/// Whole seconds for display, rounding sub-second remainders up
fn timeout_secs(timeout: Duration) -> u64 {
    timeout.as_millis().div_ceil(1000) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use redlist_explorer_core::{LoadStatus, SpeciesLoader};
    use redlist_rs::{RedlistError, SpeciesRecord};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    fn page_named(name: &str) -> PageResult {
        PageResult {
            items: vec![SpeciesRecord {
                taxon_id: 7,
                class_name: "AVES".to_string(),
                scientific_name: name.to_string(),
                category: "LC".to_string(),
            }],
            current_page: 0,
            max_pages: 3,
        }
    }

    /// Source whose responses are released by the test, keyed by page
    #[derive(Default)]
    struct GatedSource {
        gates: Mutex<HashMap<u32, oneshot::Receiver<PageResult>>>,
        calls: Mutex<Vec<SpeciesQuery>>,
    }

    impl GatedSource {
        fn gate(&self, page: u32) -> oneshot::Sender<PageResult> {
            let (tx, rx) = oneshot::channel();
            self.gates.lock().unwrap().insert(page, rx);
            tx
        }
    }

    #[async_trait]
    impl SpeciesSource for GatedSource {
        async fn species(&self, query: &SpeciesQuery) -> Result<PageResult, RedlistError> {
            self.calls.lock().unwrap().push(query.clone());
            let rx = self.gates.lock().unwrap().remove(&query.page);
            match rx {
                Some(rx) => rx.await.map_err(|_| RedlistError::Status {
                    status: 500,
                    body: "gate dropped".to_string(),
                }),
                None => Ok(PageResult::default()),
            }
        }
    }

    struct FailingSource;

    #[async_trait]
    impl SpeciesSource for FailingSource {
        async fn species(&self, _query: &SpeciesQuery) -> Result<PageResult, RedlistError> {
            Err(RedlistError::Status {
                status: 503,
                body: "unavailable".to_string(),
            })
        }
    }

    struct HangingSource;

    #[async_trait]
    impl SpeciesSource for HangingSource {
        async fn species(&self, _query: &SpeciesQuery) -> Result<PageResult, RedlistError> {
            std::future::pending().await
        }
    }

    fn apply(loader: &mut SpeciesLoader, result: AsyncResult) -> bool {
        let AsyncResult::SpeciesLoaded {
            generation,
            outcome,
        } = result;
        loader.complete(generation, outcome)
    }

    #[tokio::test]
    async fn test_out_of_order_completion_shows_latest_request() {
        let source = Arc::new(GatedSource::default());
        let release_a = source.gate(0);
        let release_b = source.gate(1);

        let (tx, mut rx) = mpsc::unbounded_channel();
        let fetcher = SpeciesFetcher::new(source.clone(), Duration::from_secs(5), tx);
        let mut loader = SpeciesLoader::new();

        let a = loader.request(&SpeciesQuery::new("AF")).unwrap();
        let b = loader.request(&SpeciesQuery::new("AF").with_page(1)).unwrap();
        let task_a = fetcher.dispatch(a);
        let task_b = fetcher.dispatch(b);

        release_b.send(page_named("from b")).unwrap();
        let first = rx.recv().await.unwrap();
        assert!(apply(&mut loader, first));

        release_a.send(page_named("from a")).unwrap();
        let second = rx.recv().await.unwrap();
        assert!(!apply(&mut loader, second));

        task_a.await.unwrap();
        task_b.await.unwrap();

        match loader.status() {
            LoadStatus::Ready(page) => assert_eq!(page.items[0].scientific_name, "from b"),
            other => panic!("expected ready, got {:?}", other),
        }
        assert_eq!(source.calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_dispatch_passes_query_through() {
        let source = Arc::new(GatedSource::default());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let fetcher = SpeciesFetcher::new(source.clone(), Duration::from_secs(5), tx);

        let query = SpeciesQuery::new("AF")
            .with_page(2)
            .with_category("NOT-A-CODE")
            .with_class_filter("all");
        fetcher
            .dispatch(FetchTicket {
                generation: 1,
                query: query.clone(),
            })
            .await
            .unwrap();

        assert!(rx.recv().await.is_some());
        assert_eq!(source.calls.lock().unwrap().as_slice(), &[query]);
    }

    #[tokio::test]
    async fn test_failure_becomes_fetch_failed() {
        let outcome = fetch_page(&FailingSource, &SpeciesQuery::new("AF"), Duration::from_secs(1)).await;
        assert_eq!(outcome.unwrap_err(), LoadError::FetchFailed);
    }

    #[tokio::test]
    async fn test_hanging_fetch_times_out() {
        let outcome = fetch_page(
            &HangingSource,
            &SpeciesQuery::new("AF"),
            Duration::from_millis(20),
        )
        .await;
        assert_eq!(outcome.unwrap_err(), LoadError::TimedOut { secs: 1 });
    }

    #[tokio::test]
    async fn test_result_normalized() {
        struct ZeroPages;

        #[async_trait]
        impl SpeciesSource for ZeroPages {
            async fn species(&self, _query: &SpeciesQuery) -> Result<PageResult, RedlistError> {
                Ok(PageResult {
                    items: Vec::new(),
                    current_page: 0,
                    max_pages: 0,
                })
            }
        }

        let page = fetch_page(&ZeroPages, &SpeciesQuery::new("AF"), Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(page.max_pages, 1);
    }

    #[test]
    fn test_timeout_secs_rounds_up() {
        assert_eq!(timeout_secs(Duration::from_secs(10)), 10);
        assert_eq!(timeout_secs(Duration::from_millis(1500)), 2);
        assert_eq!(timeout_secs(Duration::from_millis(20)), 1);
    }
}
