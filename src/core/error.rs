//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for backend requests
//! - [`ConfigError`] - Embedded configuration that failed to load

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (timeout, CORS, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Backend rejected the bearer token
    #[error("Unauthorized (HTTP {0})")]
    Unauthorized(u16),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

impl FetchError {
    /// Classify a non-2xx status.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Unauthorized(status),
            _ => Self::HttpError(status),
        }
    }
}

/// Errors loading compile-time configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `theme.toml` is not valid.
    #[error("invalid theme options: {0}")]
    ThemeParse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(FetchError::from_status(401), FetchError::Unauthorized(401));
        assert_eq!(FetchError::from_status(403), FetchError::Unauthorized(403));
        assert_eq!(FetchError::from_status(500), FetchError::HttpError(500));
    }

    #[test]
    fn test_display() {
        assert_eq!(FetchError::Timeout.to_string(), "Request timed out");
        assert_eq!(FetchError::HttpError(404).to_string(), "HTTP error: 404");
        assert_eq!(
            ConfigError::ThemeParse("bad".into()).to_string(),
            "invalid theme options: bad"
        );
    }
}
