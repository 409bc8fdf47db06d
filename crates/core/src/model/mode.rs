use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModeError {
    #[error("unknown learning mode: {0}")]
    Unknown(String),
}

/// Instructional framing for a content plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LearningMode {
    /// Sequential beginner subtopics.
    #[default]
    Learn,
    /// Question and hint pairs.
    Quiz,
    /// Advanced subtopics that assume the basics are known.
    DeepDive,
}

impl LearningMode {
    pub const ALL: [LearningMode; 3] = [Self::Learn, Self::Quiz, Self::DeepDive];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Learn => "learn",
            Self::Quiz => "quiz",
            Self::DeepDive => "deep-dive",
        }
    }
}

impl fmt::Display for LearningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LearningMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "learn" => Ok(Self::Learn),
            "quiz" => Ok(Self::Quiz),
            "deep-dive" => Ok(Self::DeepDive),
            other => Err(ModeError::Unknown(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_parse_from_their_text_form() {
        for mode in LearningMode::ALL {
            assert_eq!(mode.as_str().parse::<LearningMode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = "deep_dive".parse::<LearningMode>().unwrap_err();
        assert_eq!(err, ModeError::Unknown("deep_dive".into()));
    }

    #[test]
    fn mode_serializes_kebab_case() {
        let json = serde_json::to_string(&LearningMode::DeepDive).unwrap();
        assert_eq!(json, "\"deep-dive\"");
    }
}
