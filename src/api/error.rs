//! Errors surfaced by the color API client.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to color API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("color API responded with {status}")]
    Status { status: StatusCode },
    #[error("failed to decode scheme response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Coarse failure class: the request never produced a usable response, or
/// it did and the body had the wrong shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Transport,
    Parse,
}

impl ApiError {
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Transport(_) | ApiError::Status { .. } => ApiErrorKind::Transport,
            ApiError::Parse(_) => ApiErrorKind::Parse,
        }
    }
}
