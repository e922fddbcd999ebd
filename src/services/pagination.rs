// src/services/pagination.rs
//
// Pagination Controller
//
// ARCHITECTURE:
// - PaginationState is a plain value with pure transitions
// - The controller only sequences those transitions around the two
//   suspension points (remote fetch, watchlist read)
// - Last invocation wins: every invoke()/reset() bumps an epoch and a
//   stream whose epoch is stale stops emitting and never commits
//
// CRITICAL RULES:
// - A failed fetch or failed enrichment mutates nothing
// - The whole accumulator is re-enriched on every page
// - Only a query change or reset() clears the accumulator

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_stream::stream;
use futures_util::{future, StreamExt};

use crate::domain::{group_by_year, GroupedMovies, Movie};
use crate::lifecycle::{LifecycleState, StateStream};
use crate::services::enrichment_service::WatchlistEnricher;

// ============================================================================
// STATE
// ============================================================================

/// Next page to ask the source for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub query: String,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    current_page: u32,
    is_last_page: bool,
    accumulated: Vec<Movie>,
    active_query: String,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new("")
    }
}

impl PaginationState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            current_page: 1,
            is_last_page: false,
            accumulated: Vec::new(),
            active_query: query.into(),
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn is_last_page(&self) -> bool {
        self.is_last_page
    }

    pub fn accumulated(&self) -> &[Movie] {
        &self.accumulated
    }

    pub fn active_query(&self) -> &str {
        &self.active_query
    }

    /// Switches to `query` (starting over if it differs) and returns the page
    /// to fetch, or `None` once the end of data has been reached.
    pub fn prepare(&mut self, query: &str) -> Option<PageRequest> {
        if self.active_query != query {
            log::debug!(
                "Query changed from {:?} to {:?}; restarting at page 1",
                self.active_query,
                query
            );
            *self = Self::new(query);
        }

        if self.is_last_page {
            return None;
        }

        Some(PageRequest {
            query: self.active_query.clone(),
            page: self.current_page,
        })
    }

    /// Accumulator followed by `batch`; ids already present are skipped.
    pub fn merged_with(&self, batch: &[Movie]) -> Vec<Movie> {
        let mut seen: HashSet<i64> = self.accumulated.iter().map(|movie| movie.id).collect();
        let mut combined = self.accumulated.clone();

        for movie in batch {
            if seen.insert(movie.id) {
                combined.push(movie.clone());
            } else {
                log::debug!("Dropping duplicate movie {} from page {}", movie.id, self.current_page);
            }
        }

        combined
    }

    /// Adopts the enriched combined list and advances to the next page.
    pub fn commit(&mut self, combined: Vec<Movie>, batch_was_empty: bool) -> GroupedMovies {
        let grouped = group_by_year(&combined);

        self.accumulated = combined;
        self.is_last_page = batch_was_empty;
        self.current_page += 1;

        log::debug!(
            "Committed page {} for {:?}: {} movies, last page: {}",
            self.current_page - 1,
            self.active_query,
            self.accumulated.len(),
            self.is_last_page
        );

        grouped
    }

    /// Back to page 1 with an empty accumulator; the query is kept.
    pub fn reset(&mut self) {
        self.current_page = 1;
        self.is_last_page = false;
        self.accumulated.clear();
    }
}

// ============================================================================
// CONTROLLER
// ============================================================================

/// Remote operation a controller pages through
pub trait PageSource: Send + Sync {
    fn fetch_page(&self, query: &str, page: u32) -> StateStream<Vec<Movie>>;
}

struct Tracked {
    state: PaginationState,
    epoch: u64,
}

fn lock(inner: &Mutex<Tracked>) -> MutexGuard<'_, Tracked> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

fn is_stale(inner: &Mutex<Tracked>, epoch: u64) -> bool {
    lock(inner).epoch != epoch
}

pub struct PaginationController {
    source: Arc<dyn PageSource>,
    enricher: Arc<WatchlistEnricher>,
    inner: Arc<Mutex<Tracked>>,
}

impl PaginationController {
    pub fn new(source: Arc<dyn PageSource>, enricher: Arc<WatchlistEnricher>) -> Self {
        Self {
            source,
            enricher,
            inner: Arc::new(Mutex::new(Tracked {
                state: PaginationState::default(),
                epoch: 0,
            })),
        }
    }

    /// Fetches the next page for `query` and emits the grouped accumulator.
    ///
    /// Supersedes any stream returned by an earlier call.
    pub fn invoke(&self, query: &str) -> StateStream<GroupedMovies> {
        let (request, epoch) = {
            let mut tracked = lock(&self.inner);
            tracked.epoch += 1;
            (tracked.state.prepare(query), tracked.epoch)
        };

        let Some(request) = request else {
            log::debug!("No more pages for {:?}", query);
            return futures_util::stream::once(future::ready(LifecycleState::Idle)).boxed();
        };

        let mut upstream = self.source.fetch_page(&request.query, request.page);
        let inner = Arc::clone(&self.inner);
        let enricher = Arc::clone(&self.enricher);

        Box::pin(stream! {
            while let Some(state) = upstream.next().await {
                if is_stale(&inner, epoch) {
                    log::debug!("Dropping superseded page {} for {:?}", request.page, request.query);
                    break;
                }

                let state = state
                    .then_success(|batch| merge_page(&inner, &enricher, epoch, batch))
                    .await;

                if is_stale(&inner, epoch) {
                    break;
                }
                yield state;
            }
        })
    }

    pub fn reset(&self) {
        let mut tracked = lock(&self.inner);
        tracked.epoch += 1;
        tracked.state.reset();
    }

    /// Snapshot of the current state
    pub fn state(&self) -> PaginationState {
        lock(&self.inner).state.clone()
    }
}

async fn merge_page(
    inner: &Mutex<Tracked>,
    enricher: &WatchlistEnricher,
    epoch: u64,
    batch: Vec<Movie>,
) -> LifecycleState<GroupedMovies> {
    let combined = lock(inner).state.merged_with(&batch);

    let enriched = match enricher.mark_movies(&combined).await {
        Ok(enriched) => enriched,
        Err(error) => return LifecycleState::from_app_error(&error),
    };

    let mut tracked = lock(inner);
    if tracked.epoch != epoch {
        // Superseded while enriching; the caller drops this state.
        return LifecycleState::Idle;
    }
    LifecycleState::Success(tracked.state.commit(enriched, batch.is_empty()))
}
