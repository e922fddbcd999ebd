use super::entity::Movie;
use crate::domain::{DomainError, DomainResult};

/// Validates all Movie invariants
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    validate_movie_id(movie.id)?;
    Ok(())
}

/// Catalog ids must be positive to be addressable
pub fn validate_movie_id(id: i64) -> DomainResult<()> {
    if id <= 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Movie id must be positive, got {}",
            id
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Movie domain:
///
/// 1. Identity (catalog id) is positive and immutable
/// 2. Release year 0 means "unknown"; such movies never appear in a year group
/// 3. Watchlist membership is derived data, recomputed on every enrichment
/// 4. Duplicate ids across pages are collapsed when pages are merged
