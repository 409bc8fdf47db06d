use dioxus::prelude::*;

use reels_core::model::Reel;

use crate::vm::FeedController;

use super::scripts::{audio_element_id, read_progress};

#[component]
pub fn ReelCard(reel: Reel, index: usize) -> Element {
    let controller = use_context::<FeedController>();
    let feed = controller.feed();
    let reel_id = reel.id();

    {
        let controller = controller.clone();
        let reel = reel.clone();
        use_hook(move || {
            spawn(async move {
                controller.load_media(reel).await;
            })
        });
    }

    let (active, media, counter, session) = {
        let current = feed.read();
        (
            current.active_reel() == Some(reel_id),
            current.media(reel_id).cloned().unwrap_or_default(),
            current.counter_label(index),
            current.session_id(),
        )
    };
    let progress = media.progress();
    let audio_src = media.audio.as_ref().map(|uri| uri.to_src());
    let image_src = media.image.as_ref().map(|uri| uri.to_src());
    let audio_id = audio_element_id(reel_id);
    let topic = reel.topic().to_string();
    let subtopic = reel.subtopic().to_owned();
    let note = reel.short_note().to_owned();
    let alt = reel.visual_prompt().to_owned();

    let on_time = {
        let controller = controller.clone();
        move |_evt: MediaEvent| {
            let controller = controller.clone();
            spawn(async move {
                if let Some(percent) = read_progress(reel_id).await {
                    controller.set_progress(session, reel_id, percent);
                }
            });
        }
    };
    let on_ended = {
        let controller = controller.clone();
        move |_evt: MediaEvent| controller.set_progress(session, reel_id, 100)
    };

    rsx! {
        div { class: if active { "reel active" } else { "reel" },
            if let Some(src) = audio_src {
                audio {
                    id: "{audio_id}",
                    src: "{src}",
                    preload: "auto",
                    ontimeupdate: on_time,
                    onended: on_ended,
                }
            }

            div { class: "reel-visual",
                if let Some(src) = image_src {
                    img {
                        class: if active { "reel-image panning" } else { "reel-image" },
                        src: "{src}",
                        alt: "{alt}",
                    }
                } else {
                    div { class: "reel-placeholder",
                        div { class: "spinner" }
                        p { "Creating Visuals" }
                    }
                }
                div { class: "scrim" }
            }

            div { class: "reel-top",
                div { class: "reel-context",
                    span { class: "badge", "SR" }
                    div {
                        p { class: "reel-topic", "{topic}" }
                        p { class: "reel-caption", "AI Generated Course" }
                    }
                }
                div { class: "reel-counter", "{counter}" }
            }

            div { class: "reel-body",
                h2 { "{subtopic}" }
                p { class: "reel-note", "{note}" }
                div { class: "progress",
                    div { class: "progress-fill", style: "width: {progress}%" }
                }
            }
        }
    }
}
