// src/config.rs
//
// Runtime configuration
//
// Everything is read from MOVIEHUB_* environment variables (a `.env` file is
// loaded by the binary first). Missing optional values fall back to defaults;
// present but malformed values are errors.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;

use crate::application::session::SessionConfig;
use crate::db::get_database_path;
use crate::error::{AppError, AppResult};
use crate::integrations::tmdb::ClientSettings;

pub const ENV_API_BASE_URL: &str = "MOVIEHUB_API_BASE_URL";
pub const ENV_ACCESS_TOKEN: &str = "MOVIEHUB_ACCESS_TOKEN";
pub const ENV_DB_PATH: &str = "MOVIEHUB_DB_PATH";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "MOVIEHUB_REQUEST_TIMEOUT_SECS";
pub const ENV_SEARCH_DEBOUNCE_MS: &str = "MOVIEHUB_SEARCH_DEBOUNCE_MS";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client: ClientSettings,
    pub database_path: PathBuf,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut client = ClientSettings::default();
        if let Some(base_url) = value(ENV_API_BASE_URL) {
            client.base_url = parse_base_url(&base_url)?;
        }
        client.access_token = value(ENV_ACCESS_TOKEN);
        if let Some(raw) = value(ENV_REQUEST_TIMEOUT_SECS) {
            client.request_timeout = Duration::from_secs(parse_number(ENV_REQUEST_TIMEOUT_SECS, &raw)?);
        }

        let database_path = match value(ENV_DB_PATH) {
            Some(path) => PathBuf::from(path),
            None => get_database_path()?,
        };

        let mut session = SessionConfig::default();
        if let Some(raw) = value(ENV_SEARCH_DEBOUNCE_MS) {
            session.search_debounce = Duration::from_millis(parse_number(ENV_SEARCH_DEBOUNCE_MS, &raw)?);
        }

        Ok(Self {
            client,
            database_path,
            session,
        })
    }

    /// The binary refuses to start without credentials
    pub fn require_access_token(&self) -> AppResult<&str> {
        self.client
            .access_token
            .as_deref()
            .ok_or_else(|| AppError::Config(format!("{} is not set", ENV_ACCESS_TOKEN)))
    }
}

fn parse_base_url(raw: &str) -> AppResult<String> {
    let url = Url::parse(raw.trim()).map_err(|e| {
        AppError::Config(format!("{} is not a valid URL '{}': {}", ENV_API_BASE_URL, raw, e))
    })?;

    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url.to_string()),
        scheme => Err(AppError::Config(format!(
            "{} must be an http(s) URL with a host, got scheme '{}'",
            ENV_API_BASE_URL, scheme
        ))),
    }
}

fn parse_number(key: &str, raw: &str) -> AppResult<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| AppError::Config(format!("{} must be a non-negative integer, got '{}'", key, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_only_db_path_set() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_DB_PATH, "/tmp/moviehub-test.db")])).unwrap();

        assert_eq!(config.client.base_url, "https://api.themoviedb.org/3/");
        assert!(config.client.access_token.is_none());
        assert_eq!(config.client.request_timeout, Duration::from_secs(30));
        assert_eq!(config.session.search_debounce, Duration::from_millis(300));
        assert_eq!(config.database_path, PathBuf::from("/tmp/moviehub-test.db"));
        assert!(config.require_access_token().is_err());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, "/tmp/x.db"),
            (ENV_API_BASE_URL, "http://localhost:9000/"),
            (ENV_ACCESS_TOKEN, "secret"),
            (ENV_REQUEST_TIMEOUT_SECS, "5"),
            (ENV_SEARCH_DEBOUNCE_MS, "0"),
        ]))
        .unwrap();

        assert_eq!(config.client.base_url, "http://localhost:9000/");
        assert_eq!(config.require_access_token().unwrap(), "secret");
        assert_eq!(config.client.request_timeout, Duration::from_secs(5));
        assert_eq!(config.session.search_debounce, Duration::ZERO);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad_timeout = AppConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, "/tmp/x.db"),
            (ENV_REQUEST_TIMEOUT_SECS, "soon"),
        ]));
        assert!(matches!(bad_timeout, Err(AppError::Config(_))));

        let bad_url = AppConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, "/tmp/x.db"),
            (ENV_API_BASE_URL, "ftp://example.org"),
        ]));
        assert!(matches!(bad_url, Err(AppError::Config(_))));
    }

    #[test]
    fn test_base_url_must_parse() {
        for raw in ["http://", "https://exa mple.org/3/", "http//localhost:9000", "not a url"] {
            let result = AppConfig::from_lookup(lookup(&[
                (ENV_DB_PATH, "/tmp/x.db"),
                (ENV_API_BASE_URL, raw),
            ]));
            assert!(matches!(result, Err(AppError::Config(_))), "accepted {:?}", raw);
        }

        let config = AppConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, "/tmp/x.db"),
            (ENV_API_BASE_URL, " https://api.example.org/3/ "),
        ]))
        .unwrap();
        assert_eq!(config.client.base_url, "https://api.example.org/3/");
    }
}
