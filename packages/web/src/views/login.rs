//! Login page view with the email/password form.

use dioxus::prelude::*;
use ui::{use_session, LoginForm};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // Already signed in: nothing to do here
    let state = session.state();
    if !state.loading && state.user.is_some() {
        nav.replace(Route::Hotels {});
    }

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-page__title", "StayList" }
            p { class: "auth-page__subtitle", "Sign in to keep your favourites on every device" }

            LoginForm {
                on_success: move |_| {
                    nav.replace(Route::Hotels {});
                },
            }

            p {
                class: "auth-page__footer",
                "No account yet? "
                Link { to: Route::Signup {}, "Create one" }
            }
        }
    }
}
