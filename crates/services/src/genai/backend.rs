use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use futures::stream::BoxStream;

use reels_core::model::MediaUri;

use crate::error::GenAiError;

/// Incremental text chunks of a streamed generation.
pub type TextStream = BoxStream<'static, Result<String, GenAiError>>;

/// Aspect ratio requested for synthesized images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Portrait9x16,
    Square,
}

impl AspectRatio {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Portrait9x16 => "9:16",
            Self::Square => "1:1",
        }
    }
}

/// Binary payload returned inline by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMedia {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl InlineMedia {
    #[must_use]
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Encode as a `data:` URI the webview can load directly.
    ///
    /// # Errors
    ///
    /// Returns `GenAiError::EmptyResponse` for an empty payload.
    pub fn to_data_uri(&self) -> Result<MediaUri, GenAiError> {
        if self.data.is_empty() {
            return Err(GenAiError::EmptyResponse);
        }
        let encoded = STANDARD.encode(&self.data);
        Ok(MediaUri::from_url(format!(
            "data:{};base64,{encoded}",
            self.mime_type
        ))?)
    }
}

/// Text, image and speech generation provided by an external service.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Whether requests can be issued at all.
    fn enabled(&self) -> bool {
        true
    }

    async fn stream_text(&self, prompt: &str) -> Result<TextStream, GenAiError>;

    async fn generate_image(
        &self,
        prompt: &str,
        aspect: AspectRatio,
    ) -> Result<InlineMedia, GenAiError>;

    async fn synthesize_speech(&self, text: &str, voice: &str)
    -> Result<InlineMedia, GenAiError>;
}

/// Backend used when no API key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledBackend;

#[async_trait]
impl GenerativeBackend for DisabledBackend {
    fn enabled(&self) -> bool {
        false
    }

    async fn stream_text(&self, _prompt: &str) -> Result<TextStream, GenAiError> {
        Err(GenAiError::Disabled)
    }

    async fn generate_image(
        &self,
        _prompt: &str,
        _aspect: AspectRatio,
    ) -> Result<InlineMedia, GenAiError> {
        Err(GenAiError::Disabled)
    }

    async fn synthesize_speech(
        &self,
        _text: &str,
        _voice: &str,
    ) -> Result<InlineMedia, GenAiError> {
        Err(GenAiError::Disabled)
    }
}
