// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod enrichment_service;
pub mod movie_details_service;
pub mod movie_queries;
pub mod pagination;
pub mod watchlist_service;


pub use enrichment_service::WatchlistEnricher;

pub use movie_details_service::{
    MovieDetailsService,
    CREDITS_PER_DEPARTMENT,
    SIMILAR_MOVIES_LIMIT,
};

pub use movie_queries::{PopularMoviesQuery, SearchMoviesQuery};

pub use pagination::{
    PageRequest,
    PageSource,
    PaginationController,
    PaginationState,
};

pub use watchlist_service::WatchlistService;
