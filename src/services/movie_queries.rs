// src/services/movie_queries.rs
//
// Query Use-Cases
//
// "list" and "search" are the same pagination controller over different
// remote operations. The list use-case has no query of its own and always
// pages with "".

use std::sync::Arc;

use crate::domain::{GroupedMovies, Movie};
use crate::lifecycle::StateStream;
use crate::repositories::MovieRepository;
use crate::services::enrichment_service::WatchlistEnricher;
use crate::services::pagination::{PageSource, PaginationController, PaginationState};

// ============================================================================
// PAGE SOURCES
// ============================================================================

struct PopularPages {
    movie_repo: Arc<dyn MovieRepository>,
}

impl PageSource for PopularPages {
    fn fetch_page(&self, _query: &str, page: u32) -> StateStream<Vec<Movie>> {
        self.movie_repo.popular_movies(page)
    }
}

struct SearchPages {
    movie_repo: Arc<dyn MovieRepository>,
}

impl PageSource for SearchPages {
    fn fetch_page(&self, query: &str, page: u32) -> StateStream<Vec<Movie>> {
        self.movie_repo.search_movies(query, page)
    }
}

// ============================================================================
// USE-CASES
// ============================================================================

/// Popular movies, one page per call
pub struct PopularMoviesQuery {
    controller: PaginationController,
}

impl PopularMoviesQuery {
    pub fn new(movie_repo: Arc<dyn MovieRepository>, enricher: Arc<WatchlistEnricher>) -> Self {
        Self {
            controller: PaginationController::new(Arc::new(PopularPages { movie_repo }), enricher),
        }
    }

    pub fn invoke(&self) -> StateStream<GroupedMovies> {
        self.controller.invoke("")
    }

    pub fn reset_pagination(&self) {
        self.controller.reset();
    }

    pub fn pagination(&self) -> PaginationState {
        self.controller.state()
    }
}

/// Search results; a different query starts over at page 1
pub struct SearchMoviesQuery {
    controller: PaginationController,
}

impl SearchMoviesQuery {
    pub fn new(movie_repo: Arc<dyn MovieRepository>, enricher: Arc<WatchlistEnricher>) -> Self {
        Self {
            controller: PaginationController::new(Arc::new(SearchPages { movie_repo }), enricher),
        }
    }

    pub fn invoke(&self, query: &str) -> StateStream<GroupedMovies> {
        self.controller.invoke(query)
    }

    pub fn reset_pagination(&self) {
        self.controller.reset();
    }

    pub fn pagination(&self) -> PaginationState {
        self.controller.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MovieCredits, MovieDetails};
    use crate::lifecycle::LifecycleState;
    use crate::repositories::MockWatchlistRepository;
    use futures_util::{stream, StreamExt};
    use std::sync::Mutex;

    /// Records which remote operation was called with which arguments
    #[derive(Default)]
    struct RecordingRepository {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingRepository {
        fn answer(&self, call: String, movies: Vec<Movie>) -> StateStream<Vec<Movie>> {
            self.calls.lock().unwrap().push(call);
            stream::iter(vec![
                LifecycleState::Processing,
                LifecycleState::Success(movies),
                LifecycleState::Idle,
            ])
            .boxed()
        }
    }

    impl MovieRepository for RecordingRepository {
        fn popular_movies(&self, page: u32) -> StateStream<Vec<Movie>> {
            self.answer(format!("popular:{}", page), vec![Movie::new(page as i64, "Popular", 2020)])
        }

        fn search_movies(&self, query: &str, page: u32) -> StateStream<Vec<Movie>> {
            self.answer(format!("search:{}:{}", query, page), vec![Movie::new(100 + page as i64, query, 2019)])
        }

        fn movie_details(&self, _movie_id: i64) -> StateStream<MovieDetails> {
            stream::empty().boxed()
        }

        fn similar_movies(&self, _movie_id: i64) -> StateStream<Vec<Movie>> {
            stream::empty().boxed()
        }

        fn movie_credits(&self, _movie_id: i64) -> StateStream<MovieCredits> {
            stream::empty().boxed()
        }
    }

    fn enricher() -> Arc<WatchlistEnricher> {
        let mut repo = MockWatchlistRepository::new();
        repo.expect_list_ids().returning(|| Ok(vec![]));
        Arc::new(WatchlistEnricher::new(Arc::new(repo)))
    }

    #[tokio::test]
    async fn test_list_pages_through_popular() {
        let repo = Arc::new(RecordingRepository::default());
        let query = PopularMoviesQuery::new(repo.clone(), enricher());

        query.invoke().collect::<Vec<_>>().await;
        query.invoke().collect::<Vec<_>>().await;

        assert_eq!(*repo.calls.lock().unwrap(), vec!["popular:1", "popular:2"]);
        assert_eq!(query.pagination().accumulated().len(), 2);
        assert_eq!(query.pagination().active_query(), "");
    }

    #[tokio::test]
    async fn test_search_restarts_on_new_text() {
        let repo = Arc::new(RecordingRepository::default());
        let query = SearchMoviesQuery::new(repo.clone(), enricher());

        query.invoke("heat").collect::<Vec<_>>().await;
        query.invoke("heat").collect::<Vec<_>>().await;
        query.invoke("ronin").collect::<Vec<_>>().await;

        assert_eq!(
            *repo.calls.lock().unwrap(),
            vec!["search:heat:1", "search:heat:2", "search:ronin:1"]
        );
        assert_eq!(query.pagination().accumulated().len(), 1);
    }

    #[tokio::test]
    async fn test_reset_pagination() {
        let repo = Arc::new(RecordingRepository::default());
        let query = SearchMoviesQuery::new(repo.clone(), enricher());

        query.invoke("heat").collect::<Vec<_>>().await;
        query.reset_pagination();
        query.invoke("heat").collect::<Vec<_>>().await;

        assert_eq!(
            *repo.calls.lock().unwrap(),
            vec!["search:heat:1", "search:heat:1"]
        );
    }
}
