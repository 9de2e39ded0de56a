//! Signed-in status badge for the navbar.

use dioxus::prelude::*;

use crate::auth::use_session;
use crate::icons::{FaCircleUser, FaUserSlash};
use crate::Icon;

/// Shows who is signed in.
///
/// - **Restoring**: nothing, until the stored session has been checked
/// - **Signed in**: user icon plus the visitor's name or email
/// - **Anonymous**: gray slashed-user icon
#[component]
pub fn SessionIndicator() -> Element {
    let session = use_session();
    let state = session.state();

    if state.loading {
        return rsx! {};
    }

    match &state.user {
        Some(user) => {
            let name = user.display_name().to_string();
            let email = user.email.clone();
            rsx! {
                span {
                    class: "session-indicator session-indicator--signed-in",
                    title: "Signed in as {email}",
                    Icon { icon: FaCircleUser, width: 14, height: 14 }
                    span { class: "session-indicator__name", "{name}" }
                }
            }
        }
        None => rsx! {
            span {
                class: "session-indicator session-indicator--anonymous",
                title: "Anonymous. Sign in to keep favourites on every device",
                Icon { icon: FaUserSlash, width: 14, height: 14 }
            }
        },
    }
}
