use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use futures::StreamExt as _;
use futures::stream;

use reels_core::feed::{Feed, SessionRequest};
use reels_core::time::fixed_clock;
use services::{
    AppServices, AspectRatio, ContentPlanService, DisabledBackend, GenAiError, GenerativeBackend,
    InlineMedia, MediaService, TextStream,
};

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{FeedView, ReelsView, StartView};
use crate::vm::FeedController;

/// Streams a fixed plan body; media requests always fail.
pub struct PlanOnlyBackend {
    pub chunks: Vec<String>,
}

#[async_trait]
impl GenerativeBackend for PlanOnlyBackend {
    async fn stream_text(&self, _prompt: &str) -> Result<TextStream, GenAiError> {
        let items: Vec<Result<String, GenAiError>> =
            self.chunks.iter().cloned().map(Ok).collect();
        Ok(stream::iter(items).boxed())
    }

    async fn generate_image(
        &self,
        _prompt: &str,
        _aspect: AspectRatio,
    ) -> Result<InlineMedia, GenAiError> {
        Err(GenAiError::EmptyResponse)
    }

    async fn synthesize_speech(
        &self,
        _text: &str,
        _voice: &str,
    ) -> Result<InlineMedia, GenAiError> {
        Err(GenAiError::EmptyResponse)
    }
}

struct TestApp {
    services: AppServices,
    initial_request: Option<SessionRequest>,
}

impl UiApp for TestApp {
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

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Reels,
    Start,
    Feed,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    ctx: AppContext,
    feed: Feed,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let ctx = use_context_provider(|| props.ctx.clone());
    use_context_provider(|| {
        FeedController::with_parts(
            Signal::new(props.feed.clone()),
            ctx.plan_service(),
            ctx.media_service(),
            fixed_clock(),
        )
    });
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Reels => rsx! { ReelsView {} },
        ViewKind::Start => rsx! { StartView {} },
        ViewKind::Feed => rsx! { FeedView {} },
    }
}

pub struct HarnessOptions {
    pub backend: Arc<dyn GenerativeBackend>,
    pub initial_request: Option<SessionRequest>,
    pub feed: Feed,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            backend: Arc::new(DisabledBackend),
            initial_request: None,
            feed: Feed::new(),
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, options: HarnessOptions) -> ViewHarness {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        services: AppServices::with_backend(options.backend, "Puck"),
        initial_request: options.initial_request,
    });
    let ctx = build_app_context(&app);

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            ctx,
            feed: options.feed,
            view,
        },
    );

    ViewHarness { dom }
}
