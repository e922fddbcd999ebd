// src/services/enrichment_service.rs
//
// Watchlist Enrichment
//
// CRITICAL RULES:
// - The id set is re-read from the store on EVERY call, never cached
// - `watchlisted` is always overwritten, in both directions
// - Store failures propagate; nothing defaults to "not watchlisted"

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{Movie, MovieDetails};
use crate::error::AppResult;
use crate::repositories::WatchlistRepository;

pub struct WatchlistEnricher {
    watchlist_repo: Arc<dyn WatchlistRepository>,
}

impl WatchlistEnricher {
    pub fn new(watchlist_repo: Arc<dyn WatchlistRepository>) -> Self {
        Self { watchlist_repo }
    }

    async fn current_ids(&self) -> AppResult<HashSet<i64>> {
        let ids = self.watchlist_repo.list_ids().await.map_err(|e| {
            log::warn!("Watchlist read failed during enrichment: {}", e);
            e
        })?;
        Ok(ids.into_iter().collect())
    }

    /// Same movies, same order, membership flag recomputed
    pub async fn mark_movies(&self, movies: &[Movie]) -> AppResult<Vec<Movie>> {
        let ids = self.current_ids().await?;
        Ok(movies
            .iter()
            .map(|movie| movie.with_watchlisted(ids.contains(&movie.id)))
            .collect())
    }

    pub async fn mark_details(&self, details: MovieDetails) -> AppResult<MovieDetails> {
        let ids = self.current_ids().await?;
        let watchlisted = ids.contains(&details.id);
        Ok(details.with_watchlisted(watchlisted))
    }
}
