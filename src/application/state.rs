// src/application/state.rs
//
// Object graph for one running application.
// All fields are Arc-wrapped so sessions and tasks can share them.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::{create_connection_pool, get_connection, initialize_database, verify_database_integrity};
use crate::error::AppResult;
use crate::integrations::tmdb::{MovieApi, TmdbClient};
use crate::repositories::{
    MovieRepository, RemoteMovieRepository, SqliteWatchlistRepository, WatchlistRepository,
};
use crate::services::{
    MovieDetailsService, PopularMoviesQuery, SearchMoviesQuery, WatchlistEnricher,
    WatchlistService,
};

pub struct AppState {
    pub popular: Arc<PopularMoviesQuery>,
    pub search: Arc<SearchMoviesQuery>,
    pub details: Arc<MovieDetailsService>,
    pub watchlist: Arc<WatchlistService>,
}

impl AppState {
    /// Opens the database and connects the remote client
    pub fn initialize(config: &AppConfig) -> AppResult<Self> {
        let pool = create_connection_pool(&config.database_path)?;
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
            verify_database_integrity(&conn)?;
        }

        let api: Arc<dyn MovieApi> = Arc::new(TmdbClient::new(config.client.clone())?);
        let watchlist_repo: Arc<dyn WatchlistRepository> =
            Arc::new(SqliteWatchlistRepository::new(Arc::new(pool)));

        Ok(Self::from_parts(api, watchlist_repo))
    }

    /// Wires services over already-built collaborators
    pub fn from_parts(api: Arc<dyn MovieApi>, watchlist_repo: Arc<dyn WatchlistRepository>) -> Self {
        let movie_repo: Arc<dyn MovieRepository> = Arc::new(RemoteMovieRepository::new(api));
        let enricher = Arc::new(WatchlistEnricher::new(Arc::clone(&watchlist_repo)));

        Self {
            popular: Arc::new(PopularMoviesQuery::new(
                Arc::clone(&movie_repo),
                Arc::clone(&enricher),
            )),
            search: Arc::new(SearchMoviesQuery::new(
                Arc::clone(&movie_repo),
                Arc::clone(&enricher),
            )),
            details: Arc::new(MovieDetailsService::new(movie_repo, enricher)),
            watchlist: Arc::new(WatchlistService::new(watchlist_repo)),
        }
    }
}
