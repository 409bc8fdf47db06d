use dioxus::prelude::*;

use crate::vm::FeedController;

use super::feed::FeedView;
use super::start::StartView;

/// Shows the start screen until the first reel of a session arrives.
#[component]
pub fn ReelsView() -> Element {
    let controller = use_context::<FeedController>();
    let has_reels = !controller.feed().read().reels().is_empty();

    if has_reels {
        rsx! { FeedView {} }
    } else {
        rsx! { StartView {} }
    }
}
