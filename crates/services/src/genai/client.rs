use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use eventsource_stream::Eventsource as _;
use futures::{StreamExt as _, future};
use reqwest::{Client, Response};
use tracing::{debug, error};

use super::backend::{AspectRatio, GenerativeBackend, InlineMedia, TextStream};
use super::config::GenAiConfig;
use super::wav::playable_audio;
use super::wire::{GenerateRequest, GenerateResponse, GenerationConfig, ImageConfig, SpeechConfig};
use crate::error::GenAiError;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// REST client for the Gemini `generateContent` family of endpoints.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: GenAiConfig,
}

impl GeminiClient {
    #[must_use]
    pub fn new(config: GenAiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GenAiConfig {
        &self.config
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{model}:{method}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    async fn post(&self, url: String, body: &GenerateRequest) -> Result<Response, GenAiError> {
        let response = self
            .client
            .post(url.as_str())
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!(%status, %url, "generative request failed");
            return Err(GenAiError::HttpStatus(status));
        }
        Ok(response)
    }

    async fn generate_inline(
        &self,
        model: &str,
        body: GenerateRequest,
    ) -> Result<InlineMedia, GenAiError> {
        let url = self.endpoint(model, "generateContent");
        let response: GenerateResponse = self.post(url, &body).await?.json().await?;
        let inline = response.first_inline().ok_or(GenAiError::EmptyResponse)?;
        let data = STANDARD.decode(inline.data.as_bytes())?;
        if data.is_empty() {
            return Err(GenAiError::EmptyResponse);
        }
        Ok(InlineMedia::new(inline.mime_type.clone(), data))
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn stream_text(&self, prompt: &str) -> Result<TextStream, GenAiError> {
        let url = format!(
            "{}?alt=sse",
            self.endpoint(&self.config.text_model, "streamGenerateContent")
        );
        let response = self.post(url, &GenerateRequest::prompt(prompt)).await?;
        debug!(model = %self.config.text_model, "plan stream opened");

        let stream = response
            .bytes_stream()
            .eventsource()
            .filter_map(|event| {
                future::ready(match event {
                    Ok(event) if event.data.is_empty() || event.data == "[DONE]" => None,
                    Ok(event) => match serde_json::from_str::<GenerateResponse>(&event.data) {
                        Ok(chunk) => {
                            let text = chunk.text();
                            (!text.is_empty()).then_some(Ok(text))
                        }
                        Err(err) => Some(Err(GenAiError::Decode(err))),
                    },
                    Err(err) => Some(Err(GenAiError::Stream(err.to_string()))),
                })
            })
            .boxed();
        Ok(stream)
    }

    async fn generate_image(
        &self,
        prompt: &str,
        aspect: AspectRatio,
    ) -> Result<InlineMedia, GenAiError> {
        let body = GenerateRequest::prompt(prompt).with_config(GenerationConfig {
            response_modalities: Some(vec!["IMAGE"]),
            image_config: Some(ImageConfig {
                aspect_ratio: aspect.as_str(),
            }),
            ..GenerationConfig::default()
        });
        self.generate_inline(&self.config.image_model, body).await
    }

    async fn synthesize_speech(
        &self,
        text: &str,
        voice: &str,
    ) -> Result<InlineMedia, GenAiError> {
        let body = GenerateRequest::prompt(text).with_config(GenerationConfig {
            response_modalities: Some(vec!["AUDIO"]),
            speech_config: Some(SpeechConfig::prebuilt(voice)),
            ..GenerationConfig::default()
        });
        let media = self.generate_inline(&self.config.tts_model, body).await?;
        Ok(playable_audio(media))
    }
}
