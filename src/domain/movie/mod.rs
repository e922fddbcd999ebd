pub mod entity;
pub mod grouping;
pub mod invariants;

pub use entity::{release_year_from_date, Movie};
pub use grouping::{group_by_year, GroupedMovies, YearGroup};
pub use invariants::{validate_movie, validate_movie_id};
