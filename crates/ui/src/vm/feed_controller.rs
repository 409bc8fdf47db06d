use std::sync::Arc;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use tracing::{debug, error, info, warn};

use reels_core::Clock;
use reels_core::feed::{
    EndOfFeedAction, Feed, MediaTicket, PlaybackCommand, SessionRequest, Settled,
    index_for_scroll,
};
use reels_core::model::{MediaKind, MediaUri, Reel, ReelId, SessionId};
use services::{ContentPlanService, MediaService};

use crate::context::AppContext;
use crate::views::scripts::{self, PlayResult};

/// Drives the feed state machine from UI events and async work.
///
/// Owns the shared `Signal<Feed>`; views read it and call back in here.
#[derive(Clone)]
pub struct FeedController {
    feed: Signal<Feed>,
    plan: Arc<ContentPlanService>,
    media: Arc<MediaService>,
    clock: Clock,
}

impl FeedController {
    #[must_use]
    pub fn new(ctx: &AppContext) -> Self {
        Self::with_parts(
            Signal::new(Feed::new()),
            ctx.plan_service(),
            ctx.media_service(),
            Clock::default(),
        )
    }

    #[must_use]
    pub fn with_parts(
        feed: Signal<Feed>,
        plan: Arc<ContentPlanService>,
        media: Arc<MediaService>,
        clock: Clock,
    ) -> Self {
        Self {
            feed,
            plan,
            media,
            clock,
        }
    }

    #[must_use]
    pub fn feed(&self) -> Signal<Feed> {
        self.feed
    }

    /// Start a new session and stream its plan in the background.
    ///
    /// The stream task is rooted at the app scope so it outlives the view
    /// that asked for it.
    pub fn start(&self, request: SessionRequest) {
        let mut feed = self.feed;
        let session = feed.write().start(request.clone(), self.clock.now());
        info!(%session, topic = %request.topic, mode = %request.mode, "feed session started");

        let this = self.clone();
        let _ = spawn_forever(async move {
            this.run_plan(session, request).await;
        });
    }

    /// Discard the session and return to the start screen.
    pub fn reset(&self) {
        let mut feed = self.feed;
        feed.write().reset();
        debug!("feed reset");
    }

    pub fn dismiss_notice(&self) {
        let mut feed = self.feed;
        if feed.peek().notice().is_some() {
            feed.write().dismiss_notice();
        }
    }

    pub fn end_of_feed(&self, action: EndOfFeedAction) {
        let next = self
            .feed
            .peek()
            .request()
            .and_then(|current| action.next_request(current));
        match next {
            Some(request) => self.start(request),
            None => self.reset(),
        }
    }

    async fn run_plan(&self, session: SessionId, request: SessionRequest) {
        let mut feed = self.feed;
        let result = self
            .plan
            .stream_plan(&request.topic, request.mode, |reel| {
                if !feed.write().push_reel(session, reel) {
                    debug!(%session, "dropped reel for stale or interrupted session");
                }
            })
            .await;

        let settled = match result {
            Ok(outcome) => {
                debug!(%session, emitted = outcome.emitted, skipped = outcome.skipped, "plan stream ended");
                feed.write().complete(session, self.clock.now())
            }
            Err(err) => {
                error!(%session, error = %err, "plan stream failed");
                feed.write().fail(session)
            }
        };

        match settled {
            Settled::Completed => info!(%session, "feed complete"),
            Settled::SoftFailed => warn!(%session, "plan stream cut short; keeping received reels"),
            Settled::Reset(notice) => warn!(%session, ?notice, "feed reset to start screen"),
            Settled::Ignored => debug!(%session, "plan result arrived for a stale session"),
        }
    }

    // ─── scrolling & playback ──────────────────────────────────────────────

    /// Feed a scroll position in. Nothing is written unless the snapped entry changes.
    pub fn on_scroll(&self, offset: f64, viewport: f64) {
        let mut feed = self.feed;
        let unchanged = {
            let current = feed.peek();
            let entries = current.reels().len() + usize::from(current.show_end_of_feed());
            index_for_scroll(offset, viewport, entries) == current.active_index()
        };
        if unchanged {
            return;
        }
        let commands = feed.write().on_scroll(offset, viewport);
        self.execute(commands);
    }

    pub fn set_progress(&self, session: SessionId, reel: ReelId, percent: u8) {
        let mut feed = self.feed;
        let current = feed.peek().media(reel).map(|m| m.progress());
        if current != Some(percent) {
            feed.write().set_progress(session, reel, percent);
        }
    }

    fn execute(&self, commands: Vec<PlaybackCommand>) {
        for command in commands {
            match command {
                PlaybackCommand::Pause { reel } => {
                    spawn(async move {
                        scripts::pause_and_rewind(reel).await;
                    });
                }
                PlaybackCommand::Play {
                    session,
                    reel,
                    delay,
                } => {
                    let feed = self.feed;
                    spawn(async move {
                        tokio::time::sleep(delay).await;
                        if !feed.peek().is_active(session, reel) {
                            debug!(%reel, "skipping playback; reel is no longer active");
                            return;
                        }
                        match scripts::play(reel).await {
                            PlayResult::Started => debug!(%reel, "narration playing"),
                            PlayResult::Refused(reason) => {
                                warn!(%reel, %reason, "playback refused");
                            }
                        }
                    });
                }
            }
        }
    }

    // ─── media ─────────────────────────────────────────────────────────────

    /// Fetch image and narration for `reel`, at most once per session.
    pub async fn load_media(&self, reel: Reel) {
        let ticket = {
            let mut feed = self.feed;
            feed.write().claim_media(reel.id())
        };
        let Some(ticket) = ticket else {
            return;
        };

        let image = async {
            let uri = self.media.fetch_image(&reel).await;
            self.settle_media(ticket, MediaKind::Image, uri);
        };
        let narration = async {
            let uri = self.media.fetch_narration(&reel).await;
            self.settle_media(ticket, MediaKind::Narration, uri);
        };
        futures::join!(image, narration);
    }

    fn settle_media(&self, ticket: MediaTicket, kind: MediaKind, uri: Option<MediaUri>) {
        let mut feed = self.feed;
        if feed.peek().session_id() != ticket.session {
            debug!(reel = %ticket.reel, ?kind, "dropping media for a stale session");
            return;
        }
        if uri.is_none() {
            return;
        }
        let commands = feed.write().apply_media(ticket, kind, uri);
        self.execute(commands);
    }
}
