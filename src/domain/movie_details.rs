// src/domain/movie_details.rs
//
// Movie Details Entity
//
// Full record for a single movie. Like Movie, only `watchlisted` is derived
// locally; everything else mirrors the catalog.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub tagline: String,

    /// Raw release date as reported by the catalog
    pub release_date: String,

    pub poster_path: Option<String>,

    /// Catalog release status, e.g. "Released"
    pub status: String,

    #[serde(default)]
    pub watchlisted: bool,
}

impl MovieDetails {
    pub fn with_watchlisted(self, watchlisted: bool) -> Self {
        Self {
            watchlisted,
            ..self
        }
    }

    /// Grouping year derived from the release date
    pub fn release_year(&self) -> i32 {
        crate::domain::release_year_from_date(&self.release_date)
    }
}
