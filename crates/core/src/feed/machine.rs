use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::model::{MediaKind, MediaState, MediaUri, Reel, ReelId, SessionId};

use super::phase::SessionPhase;
use super::playback::{PLAY_SETTLE_DELAY, PlaybackCommand};
use super::request::SessionRequest;
use super::scroll::index_for_scroll;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// User-facing failure notification, raised at most once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    GenerationFailed,
    NoContent,
}

impl Notice {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::GenerationFailed => "Failed to generate content. Please try again.",
            Self::NoContent => "No reels came back for that topic. Please try another one.",
        }
    }
}

/// How the end of a plan stream was absorbed by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// Stale session or nothing in flight.
    Ignored,
    /// Stream ended normally with reels to show.
    Completed,
    /// Stream failed after reels arrived; they stay visible.
    SoftFailed,
    /// Stream ended with no reels; the feed went back to idle.
    Reset(Notice),
}

/// Permission to fetch one reel's media, issued once per reel per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaTicket {
    pub session: SessionId,
    pub reel: ReelId,
}

/// What the end-of-feed card reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSummary {
    pub request: SessionRequest,
    pub reel_count: usize,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl FeedSummary {
    #[must_use]
    pub fn elapsed_secs(&self) -> i64 {
        (self.completed_at - self.started_at).num_seconds().max(0)
    }
}

//
// ─── SESSION DATA ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
struct Session {
    id: SessionId,
    request: SessionRequest,
    reels: Vec<Reel>,
    media: HashMap<ReelId, MediaState>,
    claimed: HashSet<ReelId>,
    active: usize,
    interrupted: bool,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Session {
    fn new(id: SessionId, request: SessionRequest, started_at: DateTime<Utc>) -> Self {
        Self {
            id,
            request,
            reels: Vec::new(),
            media: HashMap::new(),
            claimed: HashSet::new(),
            active: 0,
            interrupted: false,
            started_at,
            completed_at: None,
        }
    }

    fn active_reel(&self) -> Option<ReelId> {
        self.reels.get(self.active).map(Reel::id)
    }

    fn contains(&self, reel: ReelId) -> bool {
        self.media.contains_key(&reel)
    }
}

#[derive(Debug, Clone)]
enum FeedState {
    Idle,
    Planning(Session),
    Streaming(Session),
    Complete(Session),
}

impl FeedState {
    fn phase(&self) -> SessionPhase {
        match self {
            Self::Idle => SessionPhase::Idle,
            Self::Planning(_) => SessionPhase::Planning,
            Self::Streaming(_) => SessionPhase::Streaming,
            Self::Complete(_) => SessionPhase::Complete,
        }
    }

    fn session(&self) -> Option<&Session> {
        match self {
            Self::Idle => None,
            Self::Planning(s) | Self::Streaming(s) | Self::Complete(s) => Some(s),
        }
    }

    fn session_mut(&mut self) -> Option<&mut Session> {
        match self {
            Self::Idle => None,
            Self::Planning(s) | Self::Streaming(s) | Self::Complete(s) => Some(s),
        }
    }
}

//
// ─── FEED ──────────────────────────────────────────────────────────────────────
//

/// Single-owner state machine for the reel feed.
///
/// Every operation that can be reached by async work takes the `SessionId` the
/// work was started under and does nothing when it is stale.
#[derive(Debug, Clone)]
pub struct Feed {
    generation: SessionId,
    state: FeedState,
    notice: Option<Notice>,
    trail: Vec<SessionPhase>,
}

impl Default for Feed {
    fn default() -> Self {
        Self::new()
    }
}

impl Feed {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generation: SessionId::default(),
            state: FeedState::Idle,
            notice: None,
            trail: vec![SessionPhase::Idle],
        }
    }

    // ─── transitions ───────────────────────────────────────────────────────

    /// Begin a new session, discarding whatever the previous one held.
    pub fn start(&mut self, request: SessionRequest, now: DateTime<Utc>) -> SessionId {
        self.generation = self.generation.next();
        self.notice = None;
        self.trail.clear();
        self.trail.push(self.state.phase());
        self.enter(FeedState::Planning(Session::new(self.generation, request, now)));
        self.generation
    }

    /// Append a streamed reel. Returns `false` when it was ignored.
    pub fn push_reel(&mut self, session: SessionId, reel: Reel) -> bool {
        if session != self.generation {
            return false;
        }
        let first = match &mut self.state {
            FeedState::Planning(s) => {
                s.media.insert(reel.id(), MediaState::default());
                s.reels.push(reel);
                true
            }
            FeedState::Streaming(s) if !s.interrupted => {
                if s.contains(reel.id()) {
                    return false;
                }
                s.media.insert(reel.id(), MediaState::default());
                s.reels.push(reel);
                false
            }
            _ => return false,
        };

        if first {
            let state = std::mem::replace(&mut self.state, FeedState::Idle);
            if let FeedState::Planning(s) = state {
                self.enter(FeedState::Streaming(s));
            }
        }
        true
    }

    /// The plan stream ended normally.
    pub fn complete(&mut self, session: SessionId, now: DateTime<Utc>) -> Settled {
        if session != self.generation {
            return Settled::Ignored;
        }
        match std::mem::replace(&mut self.state, FeedState::Idle) {
            FeedState::Streaming(mut s) if !s.interrupted => {
                s.completed_at = Some(now);
                self.enter(FeedState::Complete(s));
                Settled::Completed
            }
            FeedState::Planning(_) => self.reset_with(Notice::NoContent),
            other => {
                self.state = other;
                Settled::Ignored
            }
        }
    }

    /// The plan stream failed.
    pub fn fail(&mut self, session: SessionId) -> Settled {
        if session != self.generation {
            return Settled::Ignored;
        }
        match &mut self.state {
            FeedState::Streaming(s) if !s.interrupted => {
                s.interrupted = true;
                Settled::SoftFailed
            }
            FeedState::Planning(_) => self.reset_with(Notice::GenerationFailed),
            _ => Settled::Ignored,
        }
    }

    /// Back to the start screen, discarding all reels.
    pub fn reset(&mut self) {
        self.generation = self.generation.next();
        self.enter(FeedState::Idle);
    }

    fn reset_with(&mut self, notice: Notice) -> Settled {
        self.trail.push(SessionPhase::Error);
        self.notice = Some(notice);
        self.generation = self.generation.next();
        self.enter(FeedState::Idle);
        Settled::Reset(notice)
    }

    fn enter(&mut self, next: FeedState) {
        let from = self.trail.last().copied().unwrap_or(SessionPhase::Idle);
        let to = next.phase();
        debug_assert!(
            from.can_transition_to(to),
            "undefined feed transition {from} -> {to}"
        );
        self.trail.push(to);
        self.state = next;
    }

    // ─── scrolling & playback ──────────────────────────────────────────────

    /// Recompute the active entry from the scroll position.
    ///
    /// Returns no commands when the snapped index did not change. Otherwise the
    /// outgoing reel is paused before the incoming one is scheduled.
    pub fn on_scroll(&mut self, offset: f64, viewport: f64) -> Vec<PlaybackCommand> {
        let show_end = self.show_end_of_feed();
        let Some(s) = self.state.session_mut() else {
            return Vec::new();
        };
        let entries = s.reels.len() + usize::from(show_end);
        let next = index_for_scroll(offset, viewport, entries);
        if next == s.active {
            return Vec::new();
        }

        let mut commands = Vec::with_capacity(2);
        if let Some(outgoing) = s.active_reel() {
            if let Some(media) = s.media.get_mut(&outgoing) {
                media.set_progress(0);
            }
            commands.push(PlaybackCommand::Pause { reel: outgoing });
        }
        s.active = next;
        if let Some(incoming) = s.active_reel() {
            let has_audio = s.media.get(&incoming).is_some_and(|m| m.audio.is_some());
            if has_audio {
                commands.push(PlaybackCommand::Play {
                    session: s.id,
                    reel: incoming,
                    delay: PLAY_SETTLE_DELAY,
                });
            }
        }
        commands
    }

    /// Whether `reel` is still the active reel of `session`.
    #[must_use]
    pub fn is_active(&self, session: SessionId, reel: ReelId) -> bool {
        session == self.generation
            && self
                .state
                .session()
                .is_some_and(|s| s.active_reel() == Some(reel))
    }

    pub fn set_progress(&mut self, session: SessionId, reel: ReelId, percent: u8) {
        if session != self.generation {
            return;
        }
        if let Some(media) = self
            .state
            .session_mut()
            .and_then(|s| s.media.get_mut(&reel))
        {
            media.set_progress(percent);
        }
    }

    // ─── media ─────────────────────────────────────────────────────────────

    /// Claim the right to fetch media for `reel`. Succeeds once per reel per session.
    pub fn claim_media(&mut self, reel: ReelId) -> Option<MediaTicket> {
        let s = self.state.session_mut()?;
        if !s.contains(reel) || !s.claimed.insert(reel) {
            return None;
        }
        Some(MediaTicket {
            session: s.id,
            reel,
        })
    }

    /// Store a fetch result. Narration landing on the active reel schedules playback.
    pub fn apply_media(
        &mut self,
        ticket: MediaTicket,
        kind: MediaKind,
        uri: Option<MediaUri>,
    ) -> Vec<PlaybackCommand> {
        if ticket.session != self.generation {
            return Vec::new();
        }
        let Some(s) = self.state.session_mut() else {
            return Vec::new();
        };
        let Some(media) = s.media.get_mut(&ticket.reel) else {
            return Vec::new();
        };
        let playable = kind == MediaKind::Narration && uri.is_some();
        media.set(kind, uri);

        if playable && s.active_reel() == Some(ticket.reel) {
            vec![PlaybackCommand::Play {
                session: s.id,
                reel: ticket.reel,
                delay: PLAY_SETTLE_DELAY,
            }]
        } else {
            Vec::new()
        }
    }

    // ─── view accessors ────────────────────────────────────────────────────

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.generation
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    /// Phases visited since the current session started.
    #[must_use]
    pub fn trail(&self) -> &[SessionPhase] {
        &self.trail
    }

    #[must_use]
    pub fn reels(&self) -> &[Reel] {
        self.state
            .session()
            .map(|s| s.reels.as_slice())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.state.session().map_or(0, |s| s.active)
    }

    #[must_use]
    pub fn active_reel(&self) -> Option<ReelId> {
        self.state.session().and_then(Session::active_reel)
    }

    #[must_use]
    pub fn media(&self, reel: ReelId) -> Option<&MediaState> {
        self.state.session().and_then(|s| s.media.get(&reel))
    }

    #[must_use]
    pub fn request(&self) -> Option<&SessionRequest> {
        self.state.session().map(|s| &s.request)
    }

    /// Set once the stream has completed; never before.
    #[must_use]
    pub fn show_end_of_feed(&self) -> bool {
        matches!(self.state, FeedState::Complete(_))
    }

    #[must_use]
    pub fn summary(&self) -> Option<FeedSummary> {
        let FeedState::Complete(s) = &self.state else {
            return None;
        };
        Some(FeedSummary {
            request: s.request.clone(),
            reel_count: s.reels.len(),
            started_at: s.started_at,
            completed_at: s.completed_at.unwrap_or(s.started_at),
        })
    }

    /// Counter text for the reel at `index`; one extra is implied while streaming.
    #[must_use]
    pub fn counter_label(&self, index: usize) -> String {
        let len = self.reels().len();
        let total = if self.show_end_of_feed() { len } else { len + 1 };
        format!("{} / {}", index + 1, total)
    }

    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
