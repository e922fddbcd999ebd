// src/domain/watchlist.rs
//
// Watchlist Entry Entity
//
// A persisted marker that the user wants to keep track of a catalog movie.
// The catalog stays authoritative for everything about the movie itself;
// the entry only records the id and when it was added.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{validate_movie_id, DomainResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    /// Catalog id of the watchlisted movie
    pub movie_id: i64,

    /// When the movie was added
    pub added_at: DateTime<Utc>,
}

impl WatchlistEntry {
    pub fn new(movie_id: i64) -> Self {
        Self {
            movie_id,
            added_at: Utc::now(),
        }
    }
}

/// Validates WatchlistEntry invariants
pub fn validate_watchlist_entry(entry: &WatchlistEntry) -> DomainResult<()> {
    validate_movie_id(entry.movie_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_entry() {
        assert!(validate_watchlist_entry(&WatchlistEntry::new(603)).is_ok());
    }

    #[test]
    fn test_zero_id_rejected() {
        assert!(validate_watchlist_entry(&WatchlistEntry::new(0)).is_err());
    }
}
