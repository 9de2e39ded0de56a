//! # API crate: backend client and client-side state for StayList
//!
//! Everything the frontends need to talk to the hosted hotel backend and to
//! keep the visitor's session and favourites consistent across reloads.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `reqwest` client, bearer token slot, status classification |
//! | [`resources`] | CRUD over backend tables plus booking, catalogue and WhatsApp actions |
//! | [`auth`] | `AuthBackend` / `FavoritesBackend` seams implemented by [`ApiClient`] |
//! | [`session`] | [`SessionStore`]: login, signup, logout, cold-start validation |
//! | [`favorites`] | [`FavoritesStore`] and its background push worker |
//! | [`config`] | [`ApiConfig`] from TOML or environment |
//! | [`error`] | [`ApiError`] and its coarse [`ErrorKind`] |
//! | [`models`] | Wire records |
//!
//! Stores are plain values created by the app shell and handed to whatever
//! needs them; clones share state.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod favorites;
pub mod models;
pub mod resources;
pub mod session;

#[cfg(test)]
mod testing;

pub use auth::{AuthBackend, FavoritesBackend};
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, ErrorKind};
pub use favorites::{FavoritesStore, FavoritesSync};
pub use models::*;
pub use resources::{MonitoringView, Resource};
pub use session::{SessionHandle, SessionState, SessionStore};
