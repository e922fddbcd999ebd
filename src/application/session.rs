// src/application/session.rs
//
// Catalog Session - caller-side driver for one UI context
//
// CRITICAL RULES:
// - One pipeline task at a time; starting a load aborts the previous one
// - Search input is debounced inside the task, so an aborted task never
//   reaches the remote
// - Grouped results go to a watch channel, everything else becomes a
//   ViewSignal on the signal channel

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use futures_util::StreamExt;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::application::view_state::ViewSignal;
use crate::domain::GroupedMovies;
use crate::error::AppResult;
use crate::lifecycle::{LifecycleState, StateStream};
use crate::services::{PopularMoviesQuery, SearchMoviesQuery, WatchlistService};

pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub search_debounce: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
        }
    }
}

pub struct CatalogSession {
    popular: Arc<PopularMoviesQuery>,
    search: Arc<SearchMoviesQuery>,
    watchlist: Arc<WatchlistService>,
    config: SessionConfig,
    results_tx: Arc<watch::Sender<GroupedMovies>>,
    signals_tx: mpsc::UnboundedSender<ViewSignal>,
    task_handle: Mutex<Option<JoinHandle<()>>>,
}

impl CatalogSession {
    /// Returns the session and the receiving end of its signal channel.
    pub fn new(
        popular: Arc<PopularMoviesQuery>,
        search: Arc<SearchMoviesQuery>,
        watchlist: Arc<WatchlistService>,
        config: SessionConfig,
    ) -> (Self, mpsc::UnboundedReceiver<ViewSignal>) {
        let (results_tx, _) = watch::channel(GroupedMovies::default());
        let (signals_tx, signals_rx) = mpsc::unbounded_channel();

        let session = Self {
            popular,
            search,
            watchlist,
            config,
            results_tx: Arc::new(results_tx),
            signals_tx,
            task_handle: Mutex::new(None),
        };
        (session, signals_rx)
    }

    /// Latest grouped result set
    pub fn results(&self) -> watch::Receiver<GroupedMovies> {
        self.results_tx.subscribe()
    }

    /// Next page of popular movies
    pub fn load_popular(&self) {
        let popular = Arc::clone(&self.popular);
        self.replace_task(async move { popular.invoke() });
    }

    /// Debounced search; typing again within the window cancels this one
    pub fn search(&self, query: impl Into<String>) {
        let query = query.into();
        let search = Arc::clone(&self.search);
        let debounce = self.config.search_debounce;

        self.replace_task(async move {
            if !debounce.is_zero() {
                tokio::time::sleep(debounce).await;
            }
            search.invoke(&query)
        });
    }

    /// Cancels any running load and starts both listings over
    pub fn reset_pagination(&self) {
        self.abort_current();
        self.popular.reset_pagination();
        self.search.reset_pagination();
        self.results_tx.send_replace(GroupedMovies::default());
    }

    pub async fn toggle_watchlist(&self, movie_id: i64) -> AppResult<bool> {
        self.watchlist.toggle(movie_id).await
    }

    /// Waits for the current load, if any, to finish
    pub async fn settle(&self) {
        let handle = self
            .task_handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    log::error!("Catalog load task failed: {}", e);
                }
            }
        }
    }

    fn abort_current(&self) {
        let mut handle = self.task_handle.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = handle.take() {
            task.abort();
        }
    }

    fn replace_task<F>(&self, start: F)
    where
        F: std::future::Future<Output = StateStream<GroupedMovies>> + Send + 'static,
    {
        let results_tx = Arc::clone(&self.results_tx);
        let signals_tx = self.signals_tx.clone();

        let mut handle = self.task_handle.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = handle.take() {
            previous.abort();
        }

        *handle = Some(tokio::spawn(async move {
            let states = start.await;
            drive(states, &results_tx, &signals_tx).await;
        }));
    }
}

impl Drop for CatalogSession {
    fn drop(&mut self) {
        self.abort_current();
    }
}

async fn drive(
    mut states: StateStream<GroupedMovies>,
    results_tx: &watch::Sender<GroupedMovies>,
    signals_tx: &mpsc::UnboundedSender<ViewSignal>,
) {
    while let Some(state) = states.next().await {
        log::debug!("Catalog state: {}", state.name());

        if let Some(signal) = ViewSignal::from_state(&state) {
            // The receiver may be gone; results are still published.
            let _ = signals_tx.send(signal);
        }

        if let LifecycleState::Success(grouped) = state {
            log::info!(
                "Catalog now holds {} movies in {} years",
                grouped.movie_count(),
                grouped.len()
            );
            results_tx.send_replace(grouped);
        }
    }
}
