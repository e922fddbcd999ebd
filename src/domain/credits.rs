// src/domain/credits.rs
//
// Credits Entity
//
// People attached to a movie, split into cast and crew, and the department
// view built from them. Credits are never enriched with watchlist data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Departments surfaced in the credits view
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Acting,
    Directing,
}

impl Department {
    /// Catalog spelling for this department
    pub fn value(&self) -> &'static str {
        match self {
            Department::Acting => "Acting",
            Department::Directing => "Director",
        }
    }

    /// Case-insensitive lookup by catalog spelling
    pub fn from_value(value: Option<&str>) -> Option<Self> {
        let value = value?;
        [Department::Acting, Department::Directing]
            .into_iter()
            .find(|department| department.value().eq_ignore_ascii_case(value))
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePerson {
    pub id: i64,
    pub name: String,
    pub profile_path: Option<String>,
    pub popularity: f64,
    pub department: Option<Department>,

    /// Character name for cast, job title for crew
    pub job: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieCredits {
    pub cast: Vec<MoviePerson>,
    pub crew: Vec<MoviePerson>,
}

/// Department -> most popular people, both departments always present
pub type DepartmentCredits = BTreeMap<Department, Vec<MoviePerson>>;

/// Actors from the cast and directors from the crew, each sorted by popularity
/// (highest first, ties keep catalog order) and truncated to `limit`.
pub fn group_by_department(credits: MovieCredits, limit: usize) -> DepartmentCredits {
    let mut grouped = DepartmentCredits::new();
    grouped.insert(
        Department::Acting,
        top_by_popularity(credits.cast, Department::Acting, limit),
    );
    grouped.insert(
        Department::Directing,
        top_by_popularity(credits.crew, Department::Directing, limit),
    );
    grouped
}

fn top_by_popularity(
    people: Vec<MoviePerson>,
    department: Department,
    limit: usize,
) -> Vec<MoviePerson> {
    let mut selected: Vec<MoviePerson> = people
        .into_iter()
        .filter(|person| person.department == Some(department))
        .collect();

    selected.sort_by(|a, b| b.popularity.total_cmp(&a.popularity));
    selected.truncate(limit);
    selected
}
