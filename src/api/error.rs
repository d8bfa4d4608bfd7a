/// Error types for talking to the project server
use thiserror::Error;

/// Errors that can occur while polling or terminating a project
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, DNS, timeout or body read failures
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with something other than 200
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// The status body was not the expected JSON document
    #[error("Failed to parse status body: {0}")]
    Parse(String),

    /// Project identifiers must be non-empty
    #[error("Project identifier must not be empty")]
    InvalidProjectId,
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e.to_string())
    }
}
