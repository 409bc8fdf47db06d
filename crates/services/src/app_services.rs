use std::sync::Arc;

use tracing::{info, warn};

use crate::genai::{DisabledBackend, GeminiClient, GenAiConfig, GenerativeBackend};
use crate::media_service::MediaService;
use crate::plan_service::ContentPlanService;

const DEFAULT_VOICE: &str = "Puck";

/// Assembles app-facing services around one generative backend.
#[derive(Clone)]
pub struct AppServices {
    backend: Arc<dyn GenerativeBackend>,
    plan: Arc<ContentPlanService>,
    media: Arc<MediaService>,
}

impl AppServices {
    /// Build services for the given configuration.
    ///
    /// Without a configuration every request fails fast with `GenAiError::Disabled`.
    #[must_use]
    pub fn from_config(config: Option<GenAiConfig>) -> Self {
        match config {
            Some(config) => {
                info!(
                    base_url = %config.base_url,
                    text_model = %config.text_model,
                    "generative backend configured"
                );
                let voice = config.voice.clone();
                Self::with_backend(Arc::new(GeminiClient::new(config)), voice)
            }
            None => {
                warn!("no API key set; content generation is disabled");
                Self::with_backend(Arc::new(DisabledBackend), DEFAULT_VOICE)
            }
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::from_config(GenAiConfig::from_env())
    }

    #[must_use]
    pub fn with_backend(backend: Arc<dyn GenerativeBackend>, voice: impl Into<String>) -> Self {
        let plan = Arc::new(ContentPlanService::new(Arc::clone(&backend)));
        let media = Arc::new(MediaService::new(Arc::clone(&backend), voice));
        Self {
            backend,
            plan,
            media,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.backend.enabled()
    }

    #[must_use]
    pub fn plan(&self) -> Arc<ContentPlanService> {
        Arc::clone(&self.plan)
    }

    #[must_use]
    pub fn media(&self) -> Arc<MediaService> {
        Arc::clone(&self.media)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_disables_services() {
        let services = AppServices::from_config(None);
        assert!(!services.enabled());
        assert!(!services.plan().enabled());
        assert_eq!(services.media().voice(), DEFAULT_VOICE);
    }

    #[test]
    fn configured_voice_reaches_media_service() {
        let mut config = GenAiConfig::for_api_key("k");
        config.voice = "Kore".into();
        let services = AppServices::from_config(Some(config));
        assert!(services.enabled());
        assert_eq!(services.media().voice(), "Kore");
    }
}
