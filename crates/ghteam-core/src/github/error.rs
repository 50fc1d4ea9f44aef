//! Errors returned by the GitHub API client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// GitHub answered with a non-success status. `message` is GitHub's own
    /// error text, reported verbatim.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never produced a response.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body did not match the expected shape.
    #[error("Unexpected response from GitHub: {0}")]
    Decode(String),

    /// A header value (usually the token) is not a valid HTTP header.
    #[error("Invalid value for request header '{0}'")]
    InvalidHeader(String),

    /// The endpoint URL could not be built from the API base.
    #[error("Invalid GitHub API URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
            ApiError::Decode(_) | ApiError::InvalidHeader(_) | ApiError::InvalidUrl(_) => None,
        }
    }
}
