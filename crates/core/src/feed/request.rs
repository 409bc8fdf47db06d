use crate::model::{LearningMode, Topic};

/// What a feed session was started for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRequest {
    pub topic: Topic,
    pub mode: LearningMode,
}

impl SessionRequest {
    #[must_use]
    pub fn new(topic: Topic, mode: LearningMode) -> Self {
        Self { topic, mode }
    }

    #[must_use]
    pub fn learn(topic: Topic) -> Self {
        Self::new(topic, LearningMode::Learn)
    }
}

/// Follow-ups offered by the end-of-feed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndOfFeedAction {
    DeepDive,
    Quiz,
    ExploreOther,
}

impl EndOfFeedAction {
    /// The request to restart with, or `None` to return to the start screen.
    #[must_use]
    pub fn next_request(self, current: &SessionRequest) -> Option<SessionRequest> {
        match self {
            Self::DeepDive => Some(SessionRequest::new(
                current.topic.clone(),
                LearningMode::DeepDive,
            )),
            Self::Quiz => Some(SessionRequest::new(current.topic.clone(), LearningMode::Quiz)),
            Self::ExploreOther => None,
        }
    }
}
