//! The generative backend seam and its Gemini implementation.

mod backend;
mod client;
mod config;
mod wav;
mod wire;

pub use backend::{AspectRatio, DisabledBackend, GenerativeBackend, InlineMedia, TextStream};
pub use client::GeminiClient;
pub use config::GenAiConfig;
pub use wav::{pcm16_to_wav, playable_audio};
