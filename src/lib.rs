// src/lib.rs
// MovieHub - Paginated movie catalog with a local-first watchlist
//
// Architecture:
// - Domain-centric: movies, grouping and credits rules live in domain/
// - Lifecycle-driven: every remote call is observed as a LifecycleState stream
// - Explicit: pagination state is a plain value, not hidden fields
// - Local-first: the watchlist is a SQLite file the user owns
// - Application Layer: sessions, view signals and DTOs for the CLI

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod lifecycle;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    group_by_department,
    group_by_year,
    release_year_from_date,
    validate_movie,
    validate_movie_id,
    // Credits
    Department,
    DepartmentCredits,
    // Errors
    DomainError,
    // Movie
    GroupedMovies,
    Movie,
    MovieCredits,
    MovieDetails,
    MoviePerson,
    // Watchlist
    WatchlistEntry,
    YearGroup,
};

// ============================================================================
// PUBLIC API - Errors, Config, Lifecycle
// ============================================================================

pub use config::AppConfig;
pub use error::{AppError, AppResult, ErrorClass};
pub use lifecycle::{perform_call, ApiResponse, LifecycleState, StateStream};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    MovieRepository,
    RemoteMovieRepository,
    SqliteWatchlistRepository,
    WatchlistRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    MovieDetailsService,
    PageSource,
    PaginationController,
    PaginationState,
    PopularMoviesQuery,
    SearchMoviesQuery,
    WatchlistEnricher,
    WatchlistService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, CatalogSession, SessionConfig, ViewSignal};

// Re-export application submodules
pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{ClientSettings, MovieApi, TmdbClient};
