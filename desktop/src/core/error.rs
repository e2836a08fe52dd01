//! # Common Error Types
//!
//! Consolidated error handling for the desktop client.
//!
//! Errors are categorized by their source:
//!
//! - **Api**: Backend communication errors (network, HTTP status, JSON parsing)
//! - **Config**: Startup configuration errors (theme file, base URL)
//! - **Validation**: Input validation errors (empty message, request in flight)

use thiserror::Error;

/// Application-wide error type.
///
/// Each variant carries a descriptive `String` message for context. The
/// `#[error]` attribute from `thiserror` provides `Display` and `Error`
/// implementations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    #[error("API error: {0}")]
    Api(String),

    /// Configuration error (unreadable or malformed theme file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let api_err = AppError::Api("Connection refused".to_string());
        let config_err = AppError::Config("theme file unreadable".to_string());
        let validation_err = AppError::Validation("message is empty".to_string());

        assert_eq!(api_err.to_string(), "API error: Connection refused");
        assert_eq!(
            config_err.to_string(),
            "Configuration error: theme file unreadable"
        );
        assert_eq!(
            validation_err.to_string(),
            "Validation error: message is empty"
        );
    }

    #[test]
    fn test_string_converts_to_api_error() {
        let err: AppError = "timeout".into();
        assert!(matches!(err, AppError::Api(_)));
    }
}
