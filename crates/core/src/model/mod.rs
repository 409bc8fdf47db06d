mod ids;
mod media;
mod mode;
mod reel;
mod topic;

pub use ids::{ParseIdError, ReelId, SessionId};
pub use media::{MediaKind, MediaState, MediaUri, MediaValidationError};
pub use mode::{LearningMode, ModeError};
pub use reel::{Reel, ReelDraft, ReelValidationError, ValidatedReel};
pub use topic::{Topic, TopicError};
