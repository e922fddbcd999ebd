// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod credits;
pub mod movie;
pub mod movie_details;
pub mod watchlist;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Movie Domain
pub use movie::{
    group_by_year, release_year_from_date, validate_movie, validate_movie_id, GroupedMovies,
    Movie, YearGroup,
};

// Movie Details
pub use movie_details::MovieDetails;

// Credits
pub use credits::{group_by_department, Department, DepartmentCredits, MovieCredits, MoviePerson};

// Watchlist
pub use watchlist::{validate_watchlist_entry, WatchlistEntry};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
