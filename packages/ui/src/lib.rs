//! This crate contains all shared UI for the workspace.

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod startup;
mod storage;
pub use storage::{make_storage, AppStorage};

mod auth;
pub use auth::{
    use_favorites, use_session, AppFavorites, AppSession, AuthState, FavoritesContext,
    LogoutButton, SessionContext, SessionProvider,
};

mod forms;
pub use forms::{validate_signup, LoginForm, SignupForm};

mod favorite_button;
pub use favorite_button::FavoriteButton;

mod session_indicator;
pub use session_indicator::SessionIndicator;

mod navbar;
pub use navbar::Navbar;
