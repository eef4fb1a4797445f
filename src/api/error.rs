//! API Client Error Types
//!
//! Failures of a single backend call. Nothing here is retried; every
//! variant propagates to whoever issued the call.

use thiserror::Error;

/// Errors that can occur when calling the dashboard backend
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection could not be established
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// The configured client timeout elapsed
    #[error("Request timeout")]
    Timeout,

    /// Any other transport failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not the JSON shape expected
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a transport-level reqwest failure
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Unavailable(
                err.url()
                    .map(|u| u.to_string())
                    .unwrap_or_else(|| err.to_string()),
            )
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Request(err)
        }
    }

    /// HTTP status of the failed response, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Result type for API client operations
pub type ApiResult<T> = Result<T, ApiError>;
