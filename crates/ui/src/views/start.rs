use dioxus::prelude::*;

use reels_core::feed::{SessionPhase, SessionRequest};
use reels_core::model::Topic;

use crate::context::AppContext;
use crate::vm::FeedController;

use super::state::ViewError;

pub const SUGGESTIONS: [&str; 4] = [
    "Artificial Intelligence",
    "Renaissance Art",
    "Crypto Economics",
    "React Performance",
];

#[component]
pub fn StartView() -> Element {
    let ctx = use_context::<AppContext>();
    let controller = use_context::<FeedController>();
    let feed = controller.feed();
    let mut topic = use_signal(String::new);

    {
        let ctx = ctx.clone();
        let controller = controller.clone();
        use_hook(move || {
            spawn(async move {
                if let Some(request) = ctx.take_initial_request() {
                    controller.start(request);
                }
            })
        });
    }

    let (loading, error_message) = {
        let current = feed.read();
        (
            current.phase() == SessionPhase::Planning,
            current
                .notice()
                .map(|notice| ViewError::from_notice(notice).message()),
        )
    };
    let blank = topic.read().trim().is_empty();

    let begin = {
        let controller = controller.clone();
        use_callback(move |raw: String| {
            if let Ok(parsed) = Topic::parse(raw) {
                controller.start(SessionRequest::learn(parsed));
            }
        })
    };
    let dismiss = {
        let controller = controller.clone();
        move |_: MouseEvent| controller.dismiss_notice()
    };

    rsx! {
        div { class: "page start-page",
            div { class: "start-hero",
                span { class: "eyebrow", "AI-Powered Learning" }
                h1 { "SkillReels" }
                p { class: "tagline",
                    "Transform any topic into an immersive, bite-sized learning experience."
                }
            }

            if let Some(message) = error_message {
                div { class: "notice", role: "alert",
                    span { "{message}" }
                    button { class: "notice-dismiss", onclick: dismiss, "Dismiss" }
                }
            }

            form { class: "start-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    if !loading {
                        begin.call(topic.read().clone());
                    }
                },
                div { class: "topic-field",
                    input {
                        r#type: "text",
                        value: "{topic}",
                        placeholder: "What do you want to master?",
                        disabled: loading,
                        autofocus: true,
                        oninput: move |evt: FormEvent| topic.set(evt.value()),
                    }
                    if loading {
                        div { class: "spinner small" }
                    }
                }
                button {
                    r#type: "submit",
                    class: "primary",
                    disabled: blank || loading,
                    if loading { "Curating Content..." } else { "Generate Reels" }
                }
            }

            div { class: "suggestions",
                for suggestion in SUGGESTIONS {
                    button {
                        key: "{suggestion}",
                        class: "suggestion",
                        disabled: loading,
                        onclick: move |_| begin.call(suggestion.to_string()),
                        "{suggestion}"
                    }
                }
            }

            if !ctx.backend_enabled() {
                p { class: "hint",
                    "Set REELS_API_KEY (or GEMINI_API_KEY) to enable content generation."
                }
            }
        }
    }
}
