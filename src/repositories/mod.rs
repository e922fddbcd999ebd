// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO enrichment
// - NO cross-repository calls
// - Explicit SQL only

pub mod movie_repository;
pub mod watchlist_repository;

pub use movie_repository::{MovieRepository, RemoteMovieRepository, DETAILS_MAPPING_FAILURE};
pub use watchlist_repository::{SqliteWatchlistRepository, WatchlistRepository};

#[cfg(test)]
pub use watchlist_repository::MockWatchlistRepository;
