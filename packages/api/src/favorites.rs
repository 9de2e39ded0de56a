//! # Favourite hotels
//!
//! [`FavoritesStore`] keeps the visitor's favourite set in memory and in
//! durable storage (key `store::FAVORITES_KEY`). It works signed out; when a
//! session exists every change is also pushed to the backend as the full set.
//!
//! Pushes go through a [`tokio::sync::watch`] outbox drained by
//! [`FavoritesSync::run`]. The outbox holds only the newest pending snapshot,
//! so a burst of toggles collapses into one push and at most one push is in
//! flight at a time. A failed push is logged and dropped; local state is
//! authoritative and the next change pushes the full set again.
//!
//! ```ignore
//! let (favorites, sync) = FavoritesStore::load(storage, session.handle(), client).await;
//! spawn(sync.run());
//! favorites.toggle("42").await;
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use store::{load_json, save_json, FavoriteSet, KeyValueStore, FAVORITES_KEY};
use tokio::sync::watch;

use crate::auth::FavoritesBackend;
use crate::session::SessionHandle;

#[derive(Debug, Clone, PartialEq)]
struct PendingPush {
    token: String,
    favorites: Vec<String>,
}

struct Inner<S> {
    storage: S,
    session: SessionHandle,
    set: RwLock<FavoriteSet>,
    outbox: watch::Sender<Option<PendingPush>>,
}

/// Favourite hotel ids. Clones share state.
pub struct FavoritesStore<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for FavoritesStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Restore the durable set (empty if missing or unreadable) and return the
    /// store together with the worker that pushes it to `backend`.
    pub async fn load<B: FavoritesBackend>(
        storage: S,
        session: SessionHandle,
        backend: B,
    ) -> (Self, FavoritesSync<B>) {
        let set = load_json::<FavoriteSet, _>(&storage, FAVORITES_KEY)
            .await
            .unwrap_or_default();
        tracing::debug!(count = set.len(), "loaded favourites");

        let (outbox, pending) = watch::channel(None);
        let store = Self {
            inner: Arc::new(Inner {
                storage,
                session,
                set: RwLock::new(set),
                outbox,
            }),
        };
        let sync = FavoritesSync {
            backend,
            pending,
        };
        (store, sync)
    }

    /// Flip membership of `hotel_id`, persist, and schedule a push if signed
    /// in. Returns whether the hotel is a favourite afterwards.
    pub async fn toggle(&self, hotel_id: &str) -> bool {
        let (now_favorite, snapshot) = {
            let mut set = self.inner.set.write().unwrap_or_else(PoisonError::into_inner);
            let now_favorite = set.toggle(hotel_id);
            (now_favorite, set.clone())
        };

        save_json(&self.inner.storage, FAVORITES_KEY, &snapshot).await;
        self.schedule_push(snapshot.to_vec());
        tracing::debug!(hotel_id, now_favorite, "toggled favourite");
        now_favorite
    }

    pub fn is_favorite(&self, hotel_id: &str) -> bool {
        self.read().contains(hotel_id)
    }

    /// Current favourites in ascending id order.
    pub fn favorites(&self) -> Vec<String> {
        self.read().to_vec()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Push the current set now, e.g. right after signing in.
    /// Returns `false` when there is no session to push under.
    pub fn sync_now(&self) -> bool {
        let favorites = self.favorites();
        self.schedule_push(favorites)
    }

    fn schedule_push(&self, favorites: Vec<String>) -> bool {
        let Some(token) = self.inner.session.token() else {
            return false;
        };
        self.inner
            .outbox
            .send_replace(Some(PendingPush { token, favorites }));
        true
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, FavoriteSet> {
        self.inner.set.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Background worker that delivers scheduled pushes.
pub struct FavoritesSync<B> {
    backend: B,
    pending: watch::Receiver<Option<PendingPush>>,
}

impl<B: FavoritesBackend> FavoritesSync<B> {
    /// Drain the outbox until every [`FavoritesStore`] clone is dropped.
    pub async fn run(mut self) {
        while self.pending.changed().await.is_ok() {
            let Some(push) = self.pending.borrow_and_update().clone() else {
                continue;
            };
            match self
                .backend
                .push_favorites(&push.token, &push.favorites)
                .await
            {
                Ok(()) => tracing::debug!(count = push.favorites.len(), "pushed favourites"),
                Err(e) => tracing::warn!(error = %e, "failed to push favourites, keeping local copy"),
            }
        }
        tracing::debug!("favourites sync stopped");
    }
}
