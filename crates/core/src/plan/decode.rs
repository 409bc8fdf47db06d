use thiserror::Error;

use crate::model::{ReelDraft, ReelValidationError, ValidatedReel};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("line is not a plan record: {0}")]
    Json(String),
    #[error(transparent)]
    Invalid(#[from] ReelValidationError),
}

/// Turns one sanitized line into a reel record.
pub trait LineDecoder {
    /// # Errors
    ///
    /// Returns `DecodeError` when the line does not have the record shape.
    fn decode(&self, line: &str) -> Result<ValidatedReel, DecodeError>;
}

/// Decodes a standalone JSON object per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLineDecoder;

impl LineDecoder for JsonLineDecoder {
    fn decode(&self, line: &str) -> Result<ValidatedReel, DecodeError> {
        let draft: ReelDraft =
            serde_json::from_str(line).map_err(|err| DecodeError::Json(err.to_string()))?;
        Ok(draft.validate()?)
    }
}
