pub mod client;
pub mod models;

#[cfg(test)]
pub use client::MockMovieApi;
pub use client::{ClientSettings, MovieApi, TmdbClient, DEFAULT_BASE_URL};
pub use models::{
    map_credits, map_movie, map_movie_details, map_movie_page, RawCredits, RawMovie,
    RawMovieDetails, RawMoviePage, RawPerson,
};
