// Centralized error handling for the user-management client

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MeetingError>;

/// Errors returned by the user account operations
#[derive(Error, Debug)]
pub enum MeetingError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("The account and authorization token must be supplied")]
    MissingAccountOrToken,

    #[error("The authorization token must be supplied")]
    MissingToken,

    #[error("Invalid service endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Query encoding failed: {0}")]
    QueryEncode(#[from] serde_urlencoded::ser::Error),
}

impl MeetingError {
    /// True when the error was raised before any request left the process.
    ///
    /// Local errors describe bad input; retrying the same call will fail the
    /// same way.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            MeetingError::MissingField(_)
                | MeetingError::MissingAccountOrToken
                | MeetingError::MissingToken
                | MeetingError::InvalidEndpoint(_)
                | MeetingError::InvalidHeader(_)
        )
    }

    /// HTTP status of a non-2xx response, if that is what failed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            MeetingError::HttpStatus { status, .. } => Some(*status),
            MeetingError::Transport(e) => e.status(),
            _ => None,
        }
    }
}
