//! Error taxonomy for user actions
//!
//! Every failure is terminal for the action that caused it and leaves the
//! previous state intact. Callers decide whether a failure is shown to the
//! user or only logged.

use serde::Deserialize;
use thiserror::Error;

/// Failure talking to the remote API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),
    /// The server answered with a non-success status
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body could not be decoded
    #[error("Parse error: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// `message` field of a JSON error body, if the server sent one
    pub fn server_message(&self) -> Option<String> {
        let ApiError::Status { body, .. } = self else {
            return None;
        };
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty())
    }

    /// Raw response text for a status failure
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }
}

/// Client-side draft validation failures; no request is sent
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Author is required")]
    MissingAuthor,
    #[error("Price must be a number greater than zero")]
    InvalidPrice,
    #[error("Book has no identifier")]
    MissingId,
}

/// Session storage errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Session storage unavailable")]
    Unavailable,
    #[error("Session storage error: {0}")]
    Storage(String),
}
