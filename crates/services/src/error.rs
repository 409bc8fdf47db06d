//! Shared error types for the services crate.

use thiserror::Error;

use reels_core::model::MediaValidationError;

/// Errors emitted by a `GenerativeBackend`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenAiError {
    #[error("generative backend is not configured")]
    Disabled,
    #[error("generative backend returned an empty response")]
    EmptyResponse,
    #[error("generative backend request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("response stream failed: {0}")]
    Stream(String),
    #[error("malformed backend payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("malformed inline media: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error(transparent)]
    Media(#[from] MediaValidationError),
}

/// Errors emitted by `ContentPlanService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlanError {
    #[error("content plan failed: {0}")]
    Backend(#[from] GenAiError),
}
