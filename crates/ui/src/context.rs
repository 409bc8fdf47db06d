use std::sync::{Arc, Mutex};

use reels_core::feed::SessionRequest;
use services::{ContentPlanService, MediaService};

pub trait UiApp: Send + Sync {
    fn plan_service(&self) -> Arc<ContentPlanService>;
    fn media_service(&self) -> Arc<MediaService>;

    /// Whether a generative backend is configured.
    fn backend_enabled(&self) -> bool;

    /// Feed to start as soon as the window opens, if any.
    fn initial_request(&self) -> Option<SessionRequest>;
}

#[derive(Clone)]
pub struct AppContext {
    plan_service: Arc<ContentPlanService>,
    media_service: Arc<MediaService>,
    backend_enabled: bool,
    initial_request_once: Arc<Mutex<Option<SessionRequest>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            plan_service: app.plan_service(),
            media_service: app.media_service(),
            backend_enabled: app.backend_enabled(),
            initial_request_once: Arc::new(Mutex::new(app.initial_request())),
        }
    }

    #[must_use]
    pub fn plan_service(&self) -> Arc<ContentPlanService> {
        Arc::clone(&self.plan_service)
    }

    #[must_use]
    pub fn media_service(&self) -> Arc<MediaService> {
        Arc::clone(&self.media_service)
    }

    #[must_use]
    pub fn backend_enabled(&self) -> bool {
        self.backend_enabled
    }

    /// One-shot: the first caller gets the launch request, later callers get `None`.
    #[must_use]
    pub fn take_initial_request(&self) -> Option<SessionRequest> {
        self.initial_request_once
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
