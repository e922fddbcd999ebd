// src/integrations/tmdb/client.rs
//
// TMDB REST client
//
// ARCHITECTURE:
// - Thin reqwest wrapper behind the MovieApi trait
// - Returns raw payloads; mapping happens in the repository layer
// - A response that reached the server is never an Err: non-2xx
//   statuses come back as ApiResponse::Failure with the raw body
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Network errors are AppError::Transport
// - Undecodable 2xx bodies are AppError::Mapping

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};
use crate::integrations::tmdb::models::{RawCredits, RawMovieDetails, RawMoviePage};
use crate::lifecycle::ApiResponse;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Remote catalog operations consumed by the pipeline
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieApi: Send + Sync {
    async fn popular_movies(&self, page: u32) -> AppResult<ApiResponse<RawMoviePage>>;

    async fn search_movies(&self, query: &str, page: u32) -> AppResult<ApiResponse<RawMoviePage>>;

    async fn movie_details(&self, movie_id: i64) -> AppResult<ApiResponse<RawMovieDetails>>;

    async fn similar_movies(&self, movie_id: i64) -> AppResult<ApiResponse<RawMoviePage>>;

    async fn movie_credits(&self, movie_id: i64) -> AppResult<ApiResponse<RawCredits>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub base_url: String,
    pub access_token: Option<String>,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

pub struct TmdbClient {
    http_client: Client,
    settings: ClientSettings,
}

impl TmdbClient {
    pub fn new(settings: ClientSettings) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            settings,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path)
    }

    // ========================================================================
    // INTERNAL: Request Execution
    // ========================================================================

    async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> AppResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);

        let mut request = self
            .http_client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .query(query);

        if let Some(token) = &self.settings.access_token {
            request = request.bearer_auth(token);
        }

        log::debug!("GET {}", url);

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Request to {} failed: {}", path, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to read {} response: {}", path, e)))?;

        if !status.is_success() {
            log::debug!("{} answered {}", path, status.as_u16());
            return Ok(ApiResponse::failure(status.as_u16(), body));
        }

        let payload = serde_json::from_str(&body)
            .map_err(|e| AppError::Mapping(format!("Unexpected {} payload: {}", path, e)))?;

        Ok(ApiResponse::Success(payload))
    }
}

#[async_trait]
impl MovieApi for TmdbClient {
    async fn popular_movies(&self, page: u32) -> AppResult<ApiResponse<RawMoviePage>> {
        self.get_json("movie/popular", &[("page", page.to_string())])
            .await
    }

    async fn search_movies(&self, query: &str, page: u32) -> AppResult<ApiResponse<RawMoviePage>> {
        self.get_json(
            "search/movie",
            &[("query", query.to_string()), ("page", page.to_string())],
        )
        .await
    }

    async fn movie_details(&self, movie_id: i64) -> AppResult<ApiResponse<RawMovieDetails>> {
        self.get_json(&format!("movie/{}", movie_id), &[]).await
    }

    async fn similar_movies(&self, movie_id: i64) -> AppResult<ApiResponse<RawMoviePage>> {
        self.get_json(&format!("movie/{}/similar", movie_id), &[])
            .await
    }

    async fn movie_credits(&self, movie_id: i64) -> AppResult<ApiResponse<RawCredits>> {
        self.get_json(&format!("movie/{}/credits", movie_id), &[])
            .await
    }
}
