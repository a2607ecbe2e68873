//! Error types for the API client

use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No API key configured
    #[error("API key not configured. Set the {0} environment variable.")]
    MissingApiKey(&'static str),

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if *status >= 500)
    }

    /// Check if this is a quota or rate limit rejection
    #[must_use]
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Self::ApiResponse { status: 429, .. })
    }
}

impl From<ApiError> for aroundin_core::Error {
    fn from(err: ApiError) -> Self {
        use aroundin_core::Error;

        let message = err.to_string();
        let core = match &err {
            ApiError::MissingApiKey(var) => Error::missing_api_key(var),
            ApiError::Config(_) | ApiError::InvalidUrl(_) => Error::config_validation(message),
            ApiError::Request(_) => Error::external_search_unavailable(message),
            ApiError::ApiResponse { .. } | ApiError::Json(_) => Error::external_search(message),
        };
        core.with_source(err)
    }
}
