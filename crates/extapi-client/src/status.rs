//! Bucketed call outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Message attached to every 4xx response.
pub const CLIENT_ERROR_MESSAGE: &str = "external service: request failed";

/// Message attached to every 5xx response.
pub const SERVER_ERROR_MESSAGE: &str = "external service: unavailable";

/// Outcome of a completed round trip.
///
/// A `Status` is not an error: 4xx and 5xx responses come back as `Ok(Status)`
/// with [`Status::is_error`] set. The server's own error text is never kept,
/// only one of the two fixed classification messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Status {
    /// HTTP status code.
    pub code: u16,
    /// Classification message, empty outside the 4xx/5xx ranges.
    pub message: String,
}

impl Status {
    /// Classify a raw status code.
    pub fn from_code(code: u16) -> Self {
        let message = match code / 100 {
            4 => CLIENT_ERROR_MESSAGE,
            5 => SERVER_ERROR_MESSAGE,
            _ => "",
        };

        Self {
            code,
            message: message.to_string(),
        }
    }

    /// True for any code of 400 and above.
    pub fn is_error(&self) -> bool {
        self.code >= 400
    }

    /// True for 4xx.
    pub fn is_client_error(&self) -> bool {
        self.code / 100 == 4
    }

    /// True for 5xx.
    pub fn is_server_error(&self) -> bool {
        self.code / 100 == 5
    }
}

impl From<reqwest::StatusCode> for Status {
    fn from(status: reqwest::StatusCode) -> Self {
        Self::from_code(status.as_u16())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{} {}", self.code, self.message)
        }
    }
}
