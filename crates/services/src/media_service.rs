use std::sync::Arc;

use tracing::{debug, warn};

use reels_core::model::{MediaUri, Reel};

use crate::error::GenAiError;
use crate::genai::{AspectRatio, GenerativeBackend};
use crate::prompts::image_prompt;

/// Fetches the illustration and narration for a reel.
///
/// Failures are logged and reported as `None` so a card degrades to its
/// placeholder instead of surfacing an error.
#[derive(Clone)]
pub struct MediaService {
    backend: Arc<dyn GenerativeBackend>,
    voice: String,
}

impl MediaService {
    #[must_use]
    pub fn new(backend: Arc<dyn GenerativeBackend>, voice: impl Into<String>) -> Self {
        Self {
            backend,
            voice: voice.into(),
        }
    }

    #[must_use]
    pub fn voice(&self) -> &str {
        &self.voice
    }

    pub async fn fetch_image(&self, reel: &Reel) -> Option<MediaUri> {
        let prompt = image_prompt(reel.visual_prompt());
        let result = async {
            self.backend
                .generate_image(&prompt, AspectRatio::Portrait9x16)
                .await?
                .to_data_uri()
        }
        .await;
        settle(reel, "image", result)
    }

    pub async fn fetch_narration(&self, reel: &Reel) -> Option<MediaUri> {
        let result = async {
            self.backend
                .synthesize_speech(reel.narration_script(), &self.voice)
                .await?
                .to_data_uri()
        }
        .await;
        settle(reel, "narration", result)
    }
}

fn settle(reel: &Reel, kind: &str, result: Result<MediaUri, GenAiError>) -> Option<MediaUri> {
    match result {
        Ok(uri) => {
            debug!(reel = %reel.id(), kind, "media ready");
            Some(uri)
        }
        Err(GenAiError::Disabled) => None,
        Err(err) => {
            warn!(reel = %reel.id(), kind, error = %err, "media generation failed");
            None
        }
    }
}
