use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::ReelsView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ReelsView)] Reels {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            div { class: "ambient" }
            main { class: "device",
                Outlet::<Route> {}
            }
        }
    }
}
