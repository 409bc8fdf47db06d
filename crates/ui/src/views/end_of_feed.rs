use dioxus::prelude::*;

use reels_core::feed::{EndOfFeedAction, FeedSummary};

use crate::vm::FeedController;

#[component]
pub fn EndOfFeed(summary: FeedSummary) -> Element {
    let controller = use_context::<FeedController>();
    let topic = summary.request.topic.to_string();
    let count = summary.reel_count;
    let secs = summary.elapsed_secs();

    let act = use_callback(move |action: EndOfFeedAction| controller.end_of_feed(action));

    rsx! {
        div { class: "end-card",
            div { class: "end-heading",
                h2 { "Nice Work!" }
                p { "You've covered the basics of {topic}." }
                p { class: "end-summary", "{count} reels in {secs}s" }
            }
            div { class: "end-actions",
                button { class: "end-action",
                    onclick: move |_| act.call(EndOfFeedAction::DeepDive),
                    span { class: "end-action-title", "Explore More" }
                    span { class: "end-action-hint", "Deep dive into {topic}" }
                }
                button { class: "end-action",
                    onclick: move |_| act.call(EndOfFeedAction::Quiz),
                    span { class: "end-action-title", "Take Test" }
                    span { class: "end-action-hint", "Quiz on {topic}" }
                }
                button { class: "end-exit",
                    onclick: move |_| act.call(EndOfFeedAction::ExploreOther),
                    "Explore Other Topics"
                }
            }
        }
    }
}
