// src/integrations/tmdb/models.rs
//
// Raw TMDB payloads and their mapping to domain types
//
// RULES:
// - Every raw field is optional; the remote is not trusted
// - Mapping never fails for list payloads, bad records are dropped
// - Nothing here touches the watchlist

use serde::{Deserialize, Serialize};

use crate::domain::{
    release_year_from_date, validate_movie, Department, Movie, MovieCredits, MovieDetails, MoviePerson,
};

// ============================================================================
// RAW PAYLOADS
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMovie {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
}

/// Envelope shared by `movie/popular`, `search/movie` and `movie/{id}/similar`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMoviePage {
    pub page: Option<u32>,
    pub results: Option<Vec<RawMovie>>,
    pub total_pages: Option<u32>,
    pub total_results: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMovieDetails {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPerson {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub profile_path: Option<String>,
    pub popularity: Option<f64>,
    pub known_for_department: Option<String>,
    pub character: Option<String>,
    pub job: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCredits {
    pub id: Option<i64>,
    pub cast: Option<Vec<RawPerson>>,
    pub crew: Option<Vec<RawPerson>>,
}

// ============================================================================
// MAPPING
// ============================================================================

/// Records without an id cannot be addressed later and are dropped.
pub fn map_movie(raw: RawMovie) -> Option<Movie> {
    let id = raw.id?;
    Some(Movie {
        id,
        title: raw.title.unwrap_or_default(),
        overview: raw.overview.unwrap_or_default(),
        poster_path: raw.poster_path,
        release_year: raw
            .release_date
            .as_deref()
            .map(release_year_from_date)
            .unwrap_or(0),
        watchlisted: false,
    })
}

pub fn map_movie_page(page: RawMoviePage) -> Vec<Movie> {
    page.results
        .unwrap_or_default()
        .into_iter()
        .filter_map(map_movie)
        .filter(|movie| match validate_movie(movie) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("Skipping catalog record: {}", e);
                false
            }
        })
        .collect()
}

/// `None` when the payload has no id
pub fn map_movie_details(raw: RawMovieDetails) -> Option<MovieDetails> {
    Some(MovieDetails {
        id: raw.id?,
        title: raw.title.unwrap_or_default(),
        overview: raw.overview.unwrap_or_default(),
        tagline: raw.tagline.unwrap_or_default(),
        release_date: raw.release_date.unwrap_or_default(),
        poster_path: raw.poster_path,
        status: raw.status.unwrap_or_default(),
        watchlisted: false,
    })
}

fn map_person(raw: RawPerson, department: Option<Department>, job: Option<String>) -> MoviePerson {
    MoviePerson {
        id: raw.id.unwrap_or(0),
        name: raw.name.unwrap_or_default(),
        profile_path: raw.profile_path,
        popularity: raw.popularity.unwrap_or(0.0),
        department,
        job: job.unwrap_or_default(),
    }
}

/// Cast members take their department from `known_for_department` and their
/// job from `character`; crew members take both from `job`. Crew with an
/// unrecognised job is dropped.
pub fn map_credits(raw: RawCredits) -> MovieCredits {
    let cast = raw
        .cast
        .unwrap_or_default()
        .into_iter()
        .map(|mut person| {
            let department = Department::from_value(person.known_for_department.as_deref());
            let character = person.character.take();
            map_person(person, department, character)
        })
        .collect();

    let crew = raw
        .crew
        .unwrap_or_default()
        .into_iter()
        .filter_map(|person| {
            let department = Department::from_value(person.job.as_deref())?;
            let job = person.job.clone();
            Some(map_person(person, Some(department), job))
        })
        .collect();

    MovieCredits { cast, crew }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_drops_records_without_id() {
        let page: RawMoviePage = serde_json::from_value(serde_json::json!({
            "page": 1,
            "results": [
                { "id": 1, "title": "Alien", "release_date": "1979-05-25" },
                { "title": "No id" },
                { "id": 0, "title": "Zero id" },
                { "id": 2, "title": "Undated" }
            ]
        }))
        .unwrap();

        let movies = map_movie_page(page);

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[1].id, 2);
        assert_eq!(movies[0].release_year, 1979);
        assert_eq!(movies[1].release_year, 0);
        assert!(movies.iter().all(|m| !m.watchlisted));
    }

    #[test]
    fn test_empty_page_without_results_field() {
        let page: RawMoviePage = serde_json::from_str(r#"{ "page": 3 }"#).unwrap();
        assert!(map_movie_page(page).is_empty());
    }

    #[test]
    fn test_details_require_id() {
        assert!(map_movie_details(RawMovieDetails::default()).is_none());

        let details = map_movie_details(RawMovieDetails {
            id: Some(603),
            title: Some("The Matrix".to_string()),
            release_date: Some("1999-03-30".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(details.release_year(), 1999);
        assert_eq!(details.tagline, "");
    }

    #[test]
    fn test_credits_departments() {
        let raw: RawCredits = serde_json::from_value(serde_json::json!({
            "cast": [
                { "id": 1, "name": "Keanu", "known_for_department": "Acting", "character": "Neo", "popularity": 40.5, "job": "ignored" },
                { "name": "Unknown" }
            ],
            "crew": [
                { "id": 9, "name": "Lana", "job": "Director" },
                { "id": 10, "name": "Bill", "job": "Director of Photography" },
                { "id": 11, "name": "Nobody" }
            ]
        }))
        .unwrap();

        let credits = map_credits(raw);

        assert_eq!(credits.cast.len(), 2);
        assert_eq!(credits.cast[0].department, Some(Department::Acting));
        assert_eq!(credits.cast[0].job, "Neo");
        assert_eq!(credits.cast[1].job, "");
        assert_eq!(credits.cast[1].id, 0);
        assert_eq!(credits.cast[1].popularity, 0.0);
        assert_eq!(credits.cast[1].department, None);

        assert_eq!(credits.crew.len(), 1);
        assert_eq!(credits.crew[0].id, 9);
        assert_eq!(credits.crew[0].department, Some(Department::Directing));
        assert_eq!(credits.crew[0].job, "Director");
    }
}
