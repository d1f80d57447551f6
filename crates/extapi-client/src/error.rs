//! Client errors.

use crate::status::Status;

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by [`ApiClient`](crate::ApiClient) calls.
///
/// 4xx and 5xx responses are not represented here; they come back as an
/// `Ok(Status)` whose [`Status::is_error`] is true.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("invalid request URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build request: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read response body (status {status}): {source}")]
    Body {
        status: Status,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode response body (status {status}): {source}")]
    Decode {
        status: Status,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// The status of the response the error was raised on, if one arrived.
    ///
    /// Only body read and decode failures happen after a response; every
    /// other variant means no status was produced.
    pub fn status(&self) -> Option<&Status> {
        match self {
            ApiError::Body { status, .. } | ApiError::Decode { status, .. } => Some(status),
            _ => None,
        }
    }

    /// Whether the call timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_builder() {
            ApiError::Build(e)
        } else {
            ApiError::Transport(e)
        }
    }
}
