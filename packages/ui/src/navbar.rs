use dioxus::prelude::*;

use crate::session_indicator::SessionIndicator;

/// Top bar with the app's links on the left and the session badge on the right.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        div {
            class: "navbar",
            div { class: "navbar__links", {children} }
            SessionIndicator {}
        }
    }
}
