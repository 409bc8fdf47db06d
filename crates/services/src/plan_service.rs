use std::sync::Arc;

use futures::StreamExt as _;
use tracing::{debug, error, info};

use reels_core::model::{LearningMode, Reel, Topic};
use reels_core::plan::LineParser;

use crate::error::PlanError;
use crate::genai::GenerativeBackend;
use crate::prompts::plan_prompt;

/// Counts reported once a plan stream finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanOutcome {
    pub emitted: u32,
    pub skipped: u32,
}

/// Streams a content plan and turns it into reels as lines complete.
#[derive(Clone)]
pub struct ContentPlanService {
    backend: Arc<dyn GenerativeBackend>,
}

impl ContentPlanService {
    #[must_use]
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.backend.enabled()
    }

    /// Request a plan for `topic` and hand each reel to `on_reel` in order.
    ///
    /// Reels already delivered stay delivered when the stream fails midway.
    ///
    /// # Errors
    ///
    /// Returns `PlanError` when the request cannot be opened or the stream breaks.
    pub async fn stream_plan<F>(
        &self,
        topic: &Topic,
        mode: LearningMode,
        mut on_reel: F,
    ) -> Result<PlanOutcome, PlanError>
    where
        F: FnMut(Reel),
    {
        let prompt = plan_prompt(topic, mode);
        let mut parser = LineParser::for_topic(topic.clone());
        info!(%topic, %mode, "requesting content plan");

        let mut stream = self.backend.stream_text(&prompt).await.map_err(|err| {
            error!(%topic, error = %err, "content plan request failed");
            PlanError::from(err)
        })?;

        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(err) => {
                    error!(%topic, error = %err, emitted = parser.stats().emitted, "content plan stream broke");
                    return Err(err.into());
                }
            };
            for reel in parser.push(&chunk) {
                on_reel(reel);
            }
            log_rejections(&mut parser);
        }

        for reel in parser.finish() {
            on_reel(reel);
        }
        log_rejections(&mut parser);

        let stats = parser.stats();
        info!(%topic, emitted = stats.emitted, skipped = stats.skipped, "content plan finished");
        Ok(PlanOutcome {
            emitted: stats.emitted,
            skipped: stats.skipped,
        })
    }
}

fn log_rejections(parser: &mut LineParser) {
    for rejection in parser.drain_rejections() {
        debug!(line = %rejection.line, error = %rejection.error, "skipping plan line");
    }
}
