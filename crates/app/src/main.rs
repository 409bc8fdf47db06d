use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use reels_core::feed::SessionRequest;
use reels_core::model::{LearningMode, ModeError, Topic, TopicError};
use services::{AppServices, ContentPlanService, GenAiConfig, MediaService};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "warn,app=info,ui=info,services=info,reels_core=info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTopic(TopicError),
    InvalidMode(ModeError),
    ModeWithoutTopic,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTopic(err) => write!(f, "invalid --topic value: {err}"),
            ArgsError::InvalidMode(err) => write!(f, "invalid --mode value: {err}"),
            ArgsError::ModeWithoutTopic => write!(f, "--mode requires --topic"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
    initial_request: Option<SessionRequest>,
}

impl UiApp for DesktopApp {
    fn plan_service(&self) -> Arc<ContentPlanService> {
        self.services.plan()
    }

    fn media_service(&self) -> Arc<MediaService> {
        self.services.media()
    }

    fn backend_enabled(&self) -> bool {
        self.services.enabled()
    }

    fn initial_request(&self) -> Option<SessionRequest> {
        self.initial_request.clone()
    }
}

#[derive(Debug, Default)]
struct Args {
    topic: Option<Topic>,
    mode: Option<LearningMode>,
    help: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--topic" => {
                    let value = require_value(args, "--topic")?;
                    parsed.topic = Some(Topic::parse(value).map_err(ArgsError::InvalidTopic)?);
                }
                "--mode" => {
                    let value = require_value(args, "--mode")?;
                    parsed.mode = Some(value.parse().map_err(ArgsError::InvalidMode)?);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        if parsed.mode.is_some() && parsed.topic.is_none() {
            return Err(ArgsError::ModeWithoutTopic);
        }
        Ok(parsed)
    }

    fn initial_request(&self) -> Option<SessionRequest> {
        let topic = self.topic.clone()?;
        Some(SessionRequest::new(topic, self.mode.unwrap_or_default()))
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--topic <text>] [--mode learn|quiz|deep-dive]");
    eprintln!();
    eprintln!("With --topic the feed starts immediately (mode defaults to learn).");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  REELS_API_KEY (or GEMINI_API_KEY, API_KEY)   enables generation");
    eprintln!("  REELS_BASE_URL, REELS_TEXT_MODEL, REELS_IMAGE_MODEL, REELS_TTS_MODEL, REELS_VOICE");
    eprintln!("  REELS_LOG (or RUST_LOG)                       log filter");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("REELS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).inspect_err(|_| print_usage())?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    init_tracing();

    let services = AppServices::from_config(GenAiConfig::from_env());
    let initial_request = parsed.initial_request();
    if let Some(request) = &initial_request {
        tracing::info!(topic = %request.topic, mode = %request.mode, "starting with a launch topic");
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        initial_request,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Reels")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_owned());
        Args::parse(&mut iter)
    }

    #[test]
    fn no_args_opens_the_start_screen() {
        let args = parse(&[]).unwrap();
        assert!(args.initial_request().is_none());
        assert!(!args.help);
    }

    #[test]
    fn topic_and_mode_build_a_launch_request() {
        let args = parse(&["--topic", "Jazz", "--mode", "deep-dive"]).unwrap();
        let request = args.initial_request().unwrap();
        assert_eq!(request.topic.as_str(), "Jazz");
        assert_eq!(request.mode, LearningMode::DeepDive);
    }

    #[test]
    fn mode_defaults_to_learn() {
        let request = parse(&["--topic", "Jazz"]).unwrap().initial_request().unwrap();
        assert_eq!(request.mode, LearningMode::Learn);
    }

    #[test]
    fn usage_errors_are_reported() {
        assert!(matches!(parse(&["--topic"]), Err(ArgsError::MissingValue { .. })));
        assert!(matches!(parse(&["--topic", "  "]), Err(ArgsError::InvalidTopic(_))));
        assert!(matches!(
            parse(&["--topic", "x", "--mode", "cram"]),
            Err(ArgsError::InvalidMode(_))
        ));
        assert!(matches!(parse(&["--mode", "quiz"]), Err(ArgsError::ModeWithoutTopic)));
        assert!(matches!(parse(&["--verbose"]), Err(ArgsError::UnknownArg(_))));
    }
}
