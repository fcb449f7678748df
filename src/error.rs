//! Error Types
//!
//! Failures a view can see when talking to the dashboard service.

use thiserror::Error;

/// Errors returned by the HTTP client
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Request build error: {0}")]
    RequestBuild(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ApiError::Status {
            status: 500,
            message: "Invalid GeoJSON response".to_string(),
        };
        assert_eq!(err.to_string(), "Server returned 500: Invalid GeoJSON response");
    }

    #[test]
    fn test_network_display() {
        let err = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Network error: Failed to fetch");
    }
}
