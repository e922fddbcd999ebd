// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The remote call could not be attempted or completed.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A successful remote payload could not be mapped to the domain.
    #[error("Mapping error: {0}")]
    Mapping(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Coarse failure taxonomy used to decide which lifecycle state a failure becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Network layer; the operation never produced an outcome.
    TransportFailure,
    /// The remote answered with an internal-error status.
    ServerFault,
    /// Non-success status, or a payload that failed local mapping.
    ApplicationError,
    /// Watchlist persistence failed.
    StoreFailure,
}

impl AppError {
    pub fn class(&self) -> ErrorClass {
        match self {
            AppError::Transport(_) => ErrorClass::TransportFailure,
            AppError::Database(_) | AppError::Pool(_) | AppError::Io(_) => ErrorClass::StoreFailure,
            AppError::Mapping(_)
            | AppError::Domain(_)
            | AppError::Serialization(_)
            | AppError::Config(_)
            | AppError::Other(_) => ErrorClass::ApplicationError,
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Other(format!("Background task failed: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_is_transport_failure() {
        let err = AppError::Transport("connection refused".to_string());
        assert_eq!(err.class(), ErrorClass::TransportFailure);
    }

    #[test]
    fn test_store_errors_are_store_failures() {
        assert_eq!(AppError::Pool("exhausted".to_string()).class(), ErrorClass::StoreFailure);
        let db = AppError::Database(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(db.class(), ErrorClass::StoreFailure);
    }

    #[test]
    fn test_mapping_is_application_error() {
        let err = AppError::Mapping("missing id".to_string());
        assert_eq!(err.class(), ErrorClass::ApplicationError);
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&AppError::Config("token missing".to_string())).unwrap();
        assert_eq!(json, "\"Configuration error: token missing\"");
    }
}
