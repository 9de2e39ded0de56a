use api::ApiConfig;
use dioxus::prelude::*;

use ui::{LogoutButton, Navbar, SessionProvider};
use views::{Favorites, Hotels, Login, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Hotels {},
        #[route("/favorites")]
        Favorites {},
    #[end_layout]
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    dioxus::launch(App);
}

/// Backend settings: environment on native, baked in at build time on the web.
fn api_config() -> ApiConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        ApiConfig::from_env()
    }
    #[cfg(target_arch = "wasm32")]
    {
        let base_url = option_env!("STAYLIST_API_URL").unwrap_or("http://localhost:8080/api");
        let config = ApiConfig::new(base_url);
        match option_env!("STAYLIST_AUTH_URL") {
            Some(auth) => config.with_auth_base_url(auth),
            None => config,
        }
    }
}

#[component]
fn App() -> Element {
    rsx! {
        SessionProvider {
            config: api_config(),
            Router::<Route> {}
        }
    }
}

/// Navbar around the browsing pages.
#[component]
fn Shell() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();
    let signed_in = session.state().user.is_some();

    rsx! {
        Navbar {
            Link { to: Route::Hotels {}, "Hotels" }
            Link { to: Route::Favorites {}, "Favourites" }
            if signed_in {
                LogoutButton {
                    class: "navbar__logout",
                    on_logout: move |_| {
                        nav.replace(Route::Hotels {});
                    },
                }
            } else {
                Link { to: Route::Login {}, "Sign in" }
            }
        }
        Outlet::<Route> {}
    }
}
