use std::fmt;

/// Lifecycle of one feed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    /// Start screen, no session.
    Idle,
    /// Request issued, no reels yet.
    Planning,
    /// At least one reel received, more may arrive.
    Streaming,
    /// The plan stream ended normally.
    Complete,
    /// The plan failed before any reel arrived. Always followed by `Idle`.
    Error,
}

impl SessionPhase {
    /// Whether `self -> next` is a defined transition.
    #[must_use]
    pub const fn can_transition_to(self, next: SessionPhase) -> bool {
        use SessionPhase::{Complete, Error, Idle, Planning, Streaming};
        matches!(
            (self, next),
            (_, Planning)
                | (Planning, Streaming)
                | (Streaming, Complete)
                | (Planning | Streaming, Error)
                | (_, Idle)
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Planning => "planning",
            Self::Streaming => "streaming",
            Self::Complete => "complete",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
