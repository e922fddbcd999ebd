// src/repositories/movie_repository.rs
//
// Remote catalog as lifecycle streams
//
// Every operation wraps one MovieApi call with the lifecycle emitter and maps
// the raw success payload to domain types. Non-success states pass through.

use std::sync::Arc;

use futures_util::StreamExt;

use crate::domain::{Movie, MovieCredits, MovieDetails};
use crate::integrations::tmdb::{map_credits, map_movie_details, map_movie_page, MovieApi};
use crate::lifecycle::{perform_call, LifecycleState, StateStream};

pub const DETAILS_MAPPING_FAILURE: &str = "Failed to map movie details.";

pub trait MovieRepository: Send + Sync {
    fn popular_movies(&self, page: u32) -> StateStream<Vec<Movie>>;

    fn search_movies(&self, query: &str, page: u32) -> StateStream<Vec<Movie>>;

    fn movie_details(&self, movie_id: i64) -> StateStream<MovieDetails>;

    fn similar_movies(&self, movie_id: i64) -> StateStream<Vec<Movie>>;

    fn movie_credits(&self, movie_id: i64) -> StateStream<MovieCredits>;
}

pub struct RemoteMovieRepository {
    api: Arc<dyn MovieApi>,
}

impl RemoteMovieRepository {
    pub fn new(api: Arc<dyn MovieApi>) -> Self {
        Self { api }
    }
}

impl MovieRepository for RemoteMovieRepository {
    fn popular_movies(&self, page: u32) -> StateStream<Vec<Movie>> {
        let api = Arc::clone(&self.api);
        perform_call(move || async move { api.popular_movies(page).await })
            .map(|state| state.map(map_movie_page))
            .boxed()
    }

    fn search_movies(&self, query: &str, page: u32) -> StateStream<Vec<Movie>> {
        let api = Arc::clone(&self.api);
        let query = query.to_string();
        perform_call(move || async move { api.search_movies(&query, page).await })
            .map(|state| state.map(map_movie_page))
            .boxed()
    }

    fn movie_details(&self, movie_id: i64) -> StateStream<MovieDetails> {
        let api = Arc::clone(&self.api);
        perform_call(move || async move { api.movie_details(movie_id).await })
            .map(|state| {
                state.map_success(|raw| match map_movie_details(raw) {
                    Some(details) => LifecycleState::Success(details),
                    None => LifecycleState::error(DETAILS_MAPPING_FAILURE, None),
                })
            })
            .boxed()
    }

    fn similar_movies(&self, movie_id: i64) -> StateStream<Vec<Movie>> {
        let api = Arc::clone(&self.api);
        perform_call(move || async move { api.similar_movies(movie_id).await })
            .map(|state| state.map(map_movie_page))
            .boxed()
    }

    fn movie_credits(&self, movie_id: i64) -> StateStream<MovieCredits> {
        let api = Arc::clone(&self.api);
        perform_call(move || async move { api.movie_credits(movie_id).await })
            .map(|state| state.map(map_credits))
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::tmdb::{MockMovieApi, RawMovie, RawMovieDetails, RawMoviePage};
    use crate::lifecycle::ApiResponse;

    fn page_of(ids: &[i64]) -> RawMoviePage {
        RawMoviePage {
            page: Some(1),
            results: Some(
                ids.iter()
                    .map(|id| RawMovie {
                        id: Some(*id),
                        title: Some(format!("Movie {}", id)),
                        release_date: Some("2001-01-01".to_string()),
                        ..Default::default()
                    })
                    .collect(),
            ),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_popular_maps_payload() {
        let mut api = MockMovieApi::new();
        api.expect_popular_movies()
            .withf(|page| *page == 2)
            .times(1)
            .returning(|_| Ok(ApiResponse::Success(page_of(&[1, 2]))));

        let repo = RemoteMovieRepository::new(Arc::new(api));
        let states: Vec<_> = repo.popular_movies(2).collect().await;

        assert_eq!(states.len(), 3);
        assert_eq!(states[0], LifecycleState::Processing);
        let movies = states[1].clone().success().unwrap();
        assert_eq!(movies.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(movies[0].release_year, 2001);
        assert_eq!(states[2], LifecycleState::Idle);
    }

    #[tokio::test]
    async fn test_search_passes_query() {
        let mut api = MockMovieApi::new();
        api.expect_search_movies()
            .withf(|query, page| query == "alien" && *page == 1)
            .times(1)
            .returning(|_, _| Ok(ApiResponse::failure(401, "Invalid API key")));

        let repo = RemoteMovieRepository::new(Arc::new(api));
        let states: Vec<_> = repo.search_movies("alien", 1).collect().await;

        assert_eq!(states[1], LifecycleState::error("Invalid API key", Some(401)));
    }

    #[tokio::test]
    async fn test_details_without_id_is_mapping_error() {
        let mut api = MockMovieApi::new();
        api.expect_movie_details()
            .returning(|_| Ok(ApiResponse::Success(RawMovieDetails::default())));

        let repo = RemoteMovieRepository::new(Arc::new(api));
        let states: Vec<_> = repo.movie_details(42).collect().await;

        assert_eq!(
            states,
            vec![
                LifecycleState::Processing,
                LifecycleState::error(DETAILS_MAPPING_FAILURE, None),
                LifecycleState::Idle,
            ]
        );
    }
}
