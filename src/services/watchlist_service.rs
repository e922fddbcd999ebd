// src/services/watchlist_service.rs
//
// Watchlist Use-Case
//
// RULES:
// - Ids are validated here, the repository trusts its input
// - toggle() reports the membership AFTER the change

use std::sync::Arc;

use crate::domain::{validate_movie_id, validate_watchlist_entry, WatchlistEntry};
use crate::error::AppResult;
use crate::repositories::WatchlistRepository;

pub struct WatchlistService {
    watchlist_repo: Arc<dyn WatchlistRepository>,
}

impl WatchlistService {
    pub fn new(watchlist_repo: Arc<dyn WatchlistRepository>) -> Self {
        Self { watchlist_repo }
    }

    pub async fn add(&self, movie_id: i64) -> AppResult<()> {
        let entry = WatchlistEntry::new(movie_id);
        validate_watchlist_entry(&entry)?;

        self.watchlist_repo.add(entry).await?;
        log::info!("Added movie {} to the watchlist", movie_id);
        Ok(())
    }

    pub async fn remove(&self, movie_id: i64) -> AppResult<()> {
        validate_movie_id(movie_id)?;

        self.watchlist_repo.remove(movie_id).await?;
        log::info!("Removed movie {} from the watchlist", movie_id);
        Ok(())
    }

    pub async fn toggle(&self, movie_id: i64) -> AppResult<bool> {
        validate_movie_id(movie_id)?;

        if self.watchlist_repo.contains(movie_id).await? {
            self.remove(movie_id).await?;
            Ok(false)
        } else {
            self.add(movie_id).await?;
            Ok(true)
        }
    }

    pub async fn contains(&self, movie_id: i64) -> AppResult<bool> {
        self.watchlist_repo.contains(movie_id).await
    }

    pub async fn ids(&self) -> AppResult<Vec<i64>> {
        self.watchlist_repo.list_ids().await
    }

    pub async fn entries(&self) -> AppResult<Vec<WatchlistEntry>> {
        self.watchlist_repo.list_entries().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::repositories::MockWatchlistRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_toggle_adds_when_absent() {
        let mut repo = MockWatchlistRepository::new();
        repo.expect_contains().with(eq(603)).returning(|_| Ok(false));
        repo.expect_add()
            .withf(|entry| entry.movie_id == 603)
            .times(1)
            .returning(|_| Ok(()));

        let service = WatchlistService::new(Arc::new(repo));
        assert!(service.toggle(603).await.unwrap());
    }

    #[tokio::test]
    async fn test_toggle_removes_when_present() {
        let mut repo = MockWatchlistRepository::new();
        repo.expect_contains().returning(|_| Ok(true));
        repo.expect_remove().with(eq(603)).times(1).returning(|_| Ok(()));

        let service = WatchlistService::new(Arc::new(repo));
        assert!(!service.toggle(603).await.unwrap());
    }

    #[tokio::test]
    async fn test_invalid_ids_never_reach_store() {
        let repo = MockWatchlistRepository::new();
        let service = WatchlistService::new(Arc::new(repo));

        assert!(matches!(service.add(0).await, Err(AppError::Domain(_))));
        assert!(matches!(service.remove(-4).await, Err(AppError::Domain(_))));
        assert!(matches!(service.toggle(0).await, Err(AppError::Domain(_))));
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let mut repo = MockWatchlistRepository::new();
        repo.expect_list_ids()
            .returning(|| Err(AppError::Pool("exhausted".to_string())));

        let service = WatchlistService::new(Arc::new(repo));
        assert!(service.ids().await.is_err());
    }
}
