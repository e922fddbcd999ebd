// src/services/movie_details_service.rs
//
// Detail lookups: details, similar movies, credits
//
// Stateless and not paginated. Movies are enriched with watchlist
// membership; people are not.

use std::sync::Arc;

use futures_util::StreamExt;

use crate::domain::{group_by_department, DepartmentCredits, Movie, MovieDetails};
use crate::lifecycle::{LifecycleState, StateStream};
use crate::repositories::MovieRepository;
use crate::services::enrichment_service::WatchlistEnricher;

pub const SIMILAR_MOVIES_LIMIT: usize = 5;
pub const CREDITS_PER_DEPARTMENT: usize = 5;

pub struct MovieDetailsService {
    movie_repo: Arc<dyn MovieRepository>,
    enricher: Arc<WatchlistEnricher>,
}

impl MovieDetailsService {
    pub fn new(movie_repo: Arc<dyn MovieRepository>, enricher: Arc<WatchlistEnricher>) -> Self {
        Self {
            movie_repo,
            enricher,
        }
    }

    pub fn details(&self, movie_id: i64) -> StateStream<MovieDetails> {
        let enricher = Arc::clone(&self.enricher);
        self.movie_repo
            .movie_details(movie_id)
            .then(move |state| {
                let enricher = Arc::clone(&enricher);
                async move {
                    state
                        .then_success(|details| async move {
                            match enricher.mark_details(details).await {
                                Ok(details) => LifecycleState::Success(details),
                                Err(error) => LifecycleState::from_app_error(&error),
                            }
                        })
                        .await
                }
            })
            .boxed()
    }

    /// Enriched first, then cut to the first few
    pub fn similar(&self, movie_id: i64) -> StateStream<Vec<Movie>> {
        let enricher = Arc::clone(&self.enricher);
        self.movie_repo
            .similar_movies(movie_id)
            .then(move |state| {
                let enricher = Arc::clone(&enricher);
                async move {
                    state
                        .then_success(|movies| async move {
                            match enricher.mark_movies(&movies).await {
                                Ok(mut marked) => {
                                    marked.truncate(SIMILAR_MOVIES_LIMIT);
                                    LifecycleState::Success(marked)
                                }
                                Err(error) => LifecycleState::from_app_error(&error),
                            }
                        })
                        .await
                }
            })
            .boxed()
    }

    /// Top actors and directors by popularity
    pub fn credits(&self, movie_id: i64) -> StateStream<DepartmentCredits> {
        self.movie_repo
            .movie_credits(movie_id)
            .map(|state| state.map(|credits| group_by_department(credits, CREDITS_PER_DEPARTMENT)))
            .boxed()
    }
}
