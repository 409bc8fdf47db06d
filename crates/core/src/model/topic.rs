use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopicError {
    #[error("Topic must not be empty.")]
    Empty,
}

/// The subject a feed session is generated for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Topic(String);

impl Topic {
    /// Parse a user-supplied topic, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::Empty` if nothing remains after trimming.
    pub fn parse(s: impl Into<String>) -> Result<Self, TopicError> {
        let s = s.into();
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TopicError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
