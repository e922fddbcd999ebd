// src/domain/movie/grouping.rs
//
// Year grouping for accumulated result sets.
//
// RULES:
// - Total: invalid years are filtered, never reported as errors
// - Buckets ordered by year, newest first
// - Inside a bucket, movies keep the order in which their pages arrived

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entity::Movie;

/// One bucket of the grouped view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearGroup {
    pub year: i32,
    pub movies: Vec<Movie>,
}

/// Accumulated movies bucketed by release year, newest year first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedMovies {
    groups: Vec<YearGroup>,
}

impl GroupedMovies {
    pub fn groups(&self) -> &[YearGroup] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<YearGroup> {
        self.groups
    }

    /// Bucket keys in display order
    pub fn years(&self) -> Vec<i32> {
        self.groups.iter().map(|group| group.year).collect()
    }

    pub fn get(&self, year: i32) -> Option<&[Movie]> {
        self.groups
            .iter()
            .find(|group| group.year == year)
            .map(|group| group.movies.as_slice())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of movies across all buckets
    pub fn movie_count(&self) -> usize {
        self.groups.iter().map(|group| group.movies.len()).sum()
    }
}

/// Buckets movies by `release_year`, dropping years <= 0 from the view.
pub fn group_by_year(movies: &[Movie]) -> GroupedMovies {
    let mut buckets: BTreeMap<Reverse<i32>, Vec<Movie>> = BTreeMap::new();

    for movie in movies.iter().filter(|movie| movie.release_year > 0) {
        buckets
            .entry(Reverse(movie.release_year))
            .or_default()
            .push(movie.clone());
    }

    GroupedMovies {
        groups: buckets
            .into_iter()
            .map(|(Reverse(year), movies)| YearGroup { year, movies })
            .collect(),
    }
}
