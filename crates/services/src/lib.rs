#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod genai;
pub mod media_service;
pub mod plan_service;
pub mod prompts;

pub use app_services::AppServices;
pub use error::{GenAiError, PlanError};
pub use genai::{
    AspectRatio, DisabledBackend, GeminiClient, GenAiConfig, GenerativeBackend, InlineMedia,
    TextStream,
};
pub use media_service::MediaService;
pub use plan_service::{ContentPlanService, PlanOutcome};
