//! Registration page view.

use dioxus::prelude::*;
use ui::{use_session, SignupForm};

use crate::Route;

/// Register page component.
#[component]
pub fn Signup() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let state = session.state();
    if !state.loading && state.user.is_some() {
        nav.replace(Route::Hotels {});
    }

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-page__title", "Create Account" }

            SignupForm {
                on_success: move |_| {
                    nav.replace(Route::Hotels {});
                },
            }

            p {
                class: "auth-page__footer",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
