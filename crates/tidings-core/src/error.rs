//! Error types for calls into the platform API.
//!
//! Framework-level errors (like `HandleError`) are defined in tidings-framework.

use thiserror::Error;

/// Error type for API calls.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The bot is not connected.
    #[error("bot is not connected")]
    NotConnected,

    /// The API call timed out.
    #[error("API call timed out")]
    Timeout,

    /// The platform rejected the call.
    #[error("API error ({error_code}): {description}")]
    Api {
        error_code: i64,
        description: String,
    },

    /// Failed to serialize/deserialize.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The platform answered with a payload of the wrong shape.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for API calls.
pub type ApiResult<T> = Result<T, ApiError>;
