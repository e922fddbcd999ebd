use serde::{Deserialize, Serialize};

/// A catalog entry as the pipeline sees it.
///
/// Everything except `watchlisted` comes from the remote catalog and is never
/// changed afterwards. `watchlisted` belongs to the enrichment stage, which
/// overwrites it on every pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Remote catalog identifier, must be positive to be usable
    pub id: i64,

    pub title: String,

    pub overview: String,

    /// Relative poster path as returned by the catalog
    pub poster_path: Option<String>,

    /// Grouping key, 0 when the release date is unknown or malformed
    pub release_year: i32,

    /// Whether the id is currently present in the persisted watchlist
    #[serde(default)]
    pub watchlisted: bool,
}

impl Movie {
    pub fn new(id: i64, title: impl Into<String>, release_year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            overview: String::new(),
            poster_path: None,
            release_year,
            watchlisted: false,
        }
    }

    /// Copy of this movie tagged with the given watchlist membership.
    pub fn with_watchlisted(&self, watchlisted: bool) -> Self {
        Self {
            watchlisted,
            ..self.clone()
        }
    }
}

/// Derives the grouping year from a raw `YYYY-MM-DD` style date.
///
/// Only the first four characters are considered. Anything shorter, or
/// anything that does not parse as an integer, yields 0.
pub fn release_year_from_date(date: &str) -> i32 {
    date.get(..4)
        .and_then(|year| year.parse::<i32>().ok())
        .unwrap_or(0)
}
