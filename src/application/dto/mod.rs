// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{
    DepartmentCredits, GroupedMovies, Movie, MovieDetails, MoviePerson, WatchlistEntry,
};

// ============================================================================
// MOVIE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub release_year: Option<i32>,
    pub watchlisted: bool,
}

impl From<&Movie> for MovieDto {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            poster_path: movie.poster_path.clone(),
            release_year: (movie.release_year > 0).then_some(movie.release_year),
            watchlisted: movie.watchlisted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearGroupDto {
    pub year: i32,
    pub movies: Vec<MovieDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedMoviesDto {
    pub groups: Vec<YearGroupDto>,
    pub total: usize,
}

impl From<&GroupedMovies> for GroupedMoviesDto {
    fn from(grouped: &GroupedMovies) -> Self {
        Self {
            groups: grouped
                .groups()
                .iter()
                .map(|group| YearGroupDto {
                    year: group.year,
                    movies: group.movies.iter().map(MovieDto::from).collect(),
                })
                .collect(),
            total: grouped.movie_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetailsDto {
    pub id: i64,
    pub title: String,
    pub tagline: Option<String>,
    pub overview: String,
    pub release_date: String,
    pub status: String,
    pub poster_path: Option<String>,
    pub watchlisted: bool,
}

impl From<&MovieDetails> for MovieDetailsDto {
    fn from(details: &MovieDetails) -> Self {
        Self {
            id: details.id,
            title: details.title.clone(),
            tagline: (!details.tagline.is_empty()).then(|| details.tagline.clone()),
            overview: details.overview.clone(),
            release_date: details.release_date.clone(),
            status: details.status.clone(),
            poster_path: details.poster_path.clone(),
            watchlisted: details.watchlisted,
        }
    }
}

// ============================================================================
// CREDITS DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDto {
    pub id: i64,
    pub name: String,
    pub job: String,
    pub popularity: f64,
    pub profile_path: Option<String>,
}

impl From<&MoviePerson> for PersonDto {
    fn from(person: &MoviePerson) -> Self {
        Self {
            id: person.id,
            name: person.name.clone(),
            job: person.job.clone(),
            popularity: person.popularity,
            profile_path: person.profile_path.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentDto {
    /// Display name: "Acting" or "Director"
    pub department: String,
    pub people: Vec<PersonDto>,
}

pub fn department_dtos(credits: &DepartmentCredits) -> Vec<DepartmentDto> {
    credits
        .iter()
        .map(|(department, people)| DepartmentDto {
            department: department.value().to_string(),
            people: people.iter().map(PersonDto::from).collect(),
        })
        .collect()
}

// ============================================================================
// WATCHLIST DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistEntryDto {
    pub movie_id: i64,
    pub added_at: String,
}

impl From<&WatchlistEntry> for WatchlistEntryDto {
    fn from(entry: &WatchlistEntry) -> Self {
        Self {
            movie_id: entry.movie_id,
            added_at: entry.added_at.to_rfc3339(),
        }
    }
}
