// src/application/error_handling.rs
//
// User-facing error rendering
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for the CLI (text or JSON)
// - Never exposes internal implementation details
// - Logs errors for debugging

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Domain invariant violation (422)
    DomainError,

    /// Watchlist storage error (500)
    Database,

    /// Remote catalog unreachable or unreadable (502)
    ExternalService,

    /// Missing or malformed settings
    Configuration,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Domain(domain_error) => Self::new(
                ErrorType::DomainError,
                "Domain validation failed",
                Some(domain_error.to_string()),
            ),

            AppError::Config(message) => Self::new(ErrorType::Configuration, message, None),

            AppError::Transport(message) => {
                log::warn!("Transport error: {}", message);
                Self::new(
                    ErrorType::ExternalService,
                    "Movie catalog is unreachable",
                    Some(message),
                )
            }

            AppError::Mapping(message) => {
                log::warn!("Mapping error: {}", message);
                Self::new(
                    ErrorType::ExternalService,
                    "Movie catalog returned unexpected data",
                    Some(message),
                )
            }

            AppError::Database(db_error) => {
                log::error!("Database error: {:?}", db_error);
                Self::new(
                    ErrorType::Database,
                    "Database operation failed",
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Pool(pool_error) => {
                log::error!("Connection pool error: {}", pool_error);
                Self::new(ErrorType::Database, "Database connection failed", None)
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::new(
                    ErrorType::Database,
                    "File system operation failed",
                    Some(io_error.to_string()),
                )
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self::new(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);
                Self::new(ErrorType::Internal, message, None)
            }
        }
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, ErrorResponse>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, ErrorResponse> {
        self.map_err(ErrorResponse::from_app_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_pool_error_is_database() {
        let error = ErrorResponse::from_app_error(AppError::Pool("timed out".to_string()));
        assert_eq!(error.error_type, ErrorType::Database);
        assert!(!error.success);
    }

    #[test]
    fn test_domain_error_keeps_details() {
        let error = ErrorResponse::from_app_error(AppError::Domain(
            DomainError::InvariantViolation("Movie id must be positive, got 0".to_string()),
        ));
        assert_eq!(error.error_type, ErrorType::DomainError);
        assert!(error.details.unwrap().contains("positive"));
    }

    #[test]
    fn test_transport_is_external_service() {
        let error = ErrorResponse::from_app_error(AppError::Transport("timed out".to_string()));
        assert_eq!(error.error_type, ErrorType::ExternalService);
    }

    #[test]
    fn test_result_conversion() {
        let result: Result<(), AppError> = Err(AppError::Config("missing token".to_string()));
        let response = result.to_error_response().unwrap_err();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error_type"], "configuration");
        assert_eq!(json["message"], "missing token");
    }
}
