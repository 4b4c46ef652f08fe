//! Storefront API errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the storefront API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An HTTP transport or body decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a status the operation does not accept.
    #[error("request failed with status {status}: {body}")]
    UnexpectedStatus {
        /// Response status
        status: StatusCode,
        /// Response body text, possibly empty
        body: String,
    },

    /// The API answered successfully but the body was not what the operation expects.
    #[error("unexpected response body: {0}")]
    UnexpectedResponse(String),
}

impl ApiError {
    /// The HTTP status, when the failure was a rejected request.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            ApiError::Http(error) => error.status(),
            ApiError::UnexpectedResponse(_) => None,
        }
    }
}
