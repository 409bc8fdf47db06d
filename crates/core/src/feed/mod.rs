//! The feed session: ordered reels, the active card, and the session phase.

mod machine;
mod phase;
mod playback;
mod request;
mod scroll;

pub use machine::{Feed, FeedSummary, MediaTicket, Notice, Settled};
pub use phase::SessionPhase;
pub use playback::{PLAY_SETTLE_DELAY, PlaybackCommand};
pub use request::{EndOfFeedAction, SessionRequest};
pub use scroll::index_for_scroll;
