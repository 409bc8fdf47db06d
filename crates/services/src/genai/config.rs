use std::env;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";
const DEFAULT_VOICE: &str = "Puck";

/// Keys consulted for the API key, in priority order.
const API_KEY_VARS: [&str; 3] = ["REELS_API_KEY", "GEMINI_API_KEY", "API_KEY"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenAiConfig {
    pub base_url: String,
    pub api_key: String,
    pub text_model: String,
    pub image_model: String,
    pub tts_model: String,
    pub voice: String,
}

impl GenAiConfig {
    /// Read configuration from the process environment.
    ///
    /// Returns `None` when no non-blank API key is set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|key| lookup(*key))
            .map(|value| value.trim().to_owned())
            .find(|value| !value.is_empty())?;

        let setting = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        Some(Self {
            base_url: setting("REELS_BASE_URL", DEFAULT_BASE_URL),
            api_key,
            text_model: setting("REELS_TEXT_MODEL", DEFAULT_TEXT_MODEL),
            image_model: setting("REELS_IMAGE_MODEL", DEFAULT_IMAGE_MODEL),
            tts_model: setting("REELS_TTS_MODEL", DEFAULT_TTS_MODEL),
            voice: setting("REELS_VOICE", DEFAULT_VOICE),
        })
    }

    /// Point the client at another server, e.g. a local mock.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn for_api_key(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: api_key.into(),
            text_model: DEFAULT_TEXT_MODEL.to_owned(),
            image_model: DEFAULT_IMAGE_MODEL.to_owned(),
            tts_model: DEFAULT_TTS_MODEL.to_owned(),
            voice: DEFAULT_VOICE.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_key_disables_backend() {
        assert!(GenAiConfig::from_lookup(lookup(&[])).is_none());
        assert!(GenAiConfig::from_lookup(lookup(&[("REELS_API_KEY", "   ")])).is_none());
    }

    #[test]
    fn defaults_fill_unset_values() {
        let config = GenAiConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "k")])).unwrap();
        assert_eq!(config, GenAiConfig::for_api_key("k"));
    }

    #[test]
    fn primary_key_wins_over_fallbacks() {
        let config = GenAiConfig::from_lookup(lookup(&[
            ("REELS_API_KEY", "primary"),
            ("API_KEY", "fallback"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "primary");
    }

    #[test]
    fn blank_primary_falls_through() {
        let config = GenAiConfig::from_lookup(lookup(&[
            ("REELS_API_KEY", ""),
            ("API_KEY", "fallback"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "fallback");
    }

    #[test]
    fn overrides_are_honored() {
        let config = GenAiConfig::from_lookup(lookup(&[
            ("API_KEY", "k"),
            ("REELS_TEXT_MODEL", "other-model"),
            ("REELS_VOICE", "Kore"),
        ]))
        .unwrap();
        assert_eq!(config.text_model, "other-model");
        assert_eq!(config.voice, "Kore");
        assert_eq!(config.image_model, DEFAULT_IMAGE_MODEL);
    }
}
