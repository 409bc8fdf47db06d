use dioxus::prelude::*;

use crate::vm::FeedController;

use super::end_of_feed::EndOfFeed;
use super::reel_card::ReelCard;
use super::scripts::{FEED_SCROLL_ID, read_scroll_metrics};

#[component]
pub fn FeedView() -> Element {
    let controller = use_context::<FeedController>();
    let feed = controller.feed();

    let (cards, summary, end_key) = {
        let current = feed.read();
        let session = current.session_id();
        let cards: Vec<_> = current
            .reels()
            .iter()
            .enumerate()
            .map(|(index, reel)| (format!("{session}-{}", reel.id()), index, reel.clone()))
            .collect();
        (cards, current.summary(), format!("{session}-end"))
    };

    let on_scroll = {
        let controller = controller.clone();
        move |_evt: ScrollEvent| {
            let controller = controller.clone();
            spawn(async move {
                if let Some(metrics) = read_scroll_metrics().await {
                    controller.on_scroll(metrics.scroll_top, metrics.client_height);
                }
            });
        }
    };
    let on_back = {
        let controller = controller.clone();
        move |_: MouseEvent| controller.reset()
    };

    rsx! {
        div { class: "feed",
            button { class: "back", "aria-label": "Back", onclick: on_back, "←" }
            div { class: "feed-scroll", id: FEED_SCROLL_ID, onscroll: on_scroll,
                for (key, index, reel) in cards {
                    ReelCard { key: "{key}", reel, index }
                }
                if let Some(summary) = summary {
                    EndOfFeed { key: "{end_key}", summary }
                }
            }
        }
    }
}
