/// Error types for Polyglot Relay
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or incomplete request; the message is safe to return to the caller.
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Translation service error: {0}")]
    Translation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Shorthand for building an `InvalidRequest`
    pub fn invalid(message: impl Into<String>) -> Self {
        AppError::InvalidRequest(message.into())
    }

    /// HTTP status this error surfaces as
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::InvalidRequest(_) => 400,
            AppError::NotFound(_) => 404,
            _ => 500,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_is_client_error() {
        let err = AppError::invalid("text must be a string");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "text must be a string");
    }

    #[test]
    fn test_processing_errors_map_to_500() {
        assert_eq!(AppError::Translation("boom".into()).status_code(), 500);
        assert_eq!(AppError::Storage("disk full".into()).status_code(), 500);
        assert_eq!(
            AppError::Io(std::io::Error::new(std::io::ErrorKind::Other, "x")).status_code(),
            500
        );
    }
}
