use thiserror::Error;

use crate::model::{MediaValidationError, ModeError, ReelValidationError, TopicError};
use crate::plan::DecodeError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Topic(#[from] TopicError),
    #[error(transparent)]
    Mode(#[from] ModeError),
    #[error(transparent)]
    Reel(#[from] ReelValidationError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    MediaValidation(#[from] MediaValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LearningMode, Topic};

    #[test]
    fn domain_errors_convert_into_umbrella() {
        fn parse(topic: &str, mode: &str) -> Result<(Topic, LearningMode), Error> {
            Ok((Topic::parse(topic)?, mode.parse()?))
        }

        assert!(matches!(parse(" ", "learn"), Err(Error::Topic(_))));
        assert!(matches!(parse("Jazz", "cram"), Err(Error::Mode(_))));
        assert!(parse("Jazz", "quiz").is_ok());
    }
}
