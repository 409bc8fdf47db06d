use std::time::Duration;

use crate::model::{ReelId, SessionId};

/// Wait before starting narration so the snap transition can finish.
pub const PLAY_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Audio side effects produced by feed transitions, to be executed in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    /// Pause the reel's audio and rewind it to the start.
    Pause { reel: ReelId },
    /// Start the reel's audio after `delay`, if it is still the active reel of `session`.
    Play {
        session: SessionId,
        reel: ReelId,
        delay: Duration,
    },
}
