//! Mount-time sequence run by [`SessionProvider`](crate::SessionProvider).
//!
//! Favourites come from local storage only, so they are opened and handed to
//! the UI before the stored session is checked against the backend. The
//! session outcome is read back from the store afterwards, which also covers
//! a login that lands while the check is still in flight.

use api::{AuthBackend, FavoritesBackend, FavoritesStore, FavoritesSync, Identity, SessionStore};
use store::KeyValueStore;

/// Open the favourites, pass them to `attach`, then restore the session.
/// Returns whoever is signed in once the check settles.
pub(crate) async fn start_stores<S, B>(
    storage: S,
    session: &SessionStore<S, B>,
    attach: impl FnOnce(FavoritesStore<S>, FavoritesSync<B>),
) -> Option<Identity>
where
    S: KeyValueStore,
    B: AuthBackend + FavoritesBackend + Clone,
{
    let (favorites, sync) =
        FavoritesStore::load(storage, session.handle(), session.backend().clone()).await;
    // A login may already have happened while the set was loading
    favorites.sync_now();
    attach(favorites, sync);

    if let Err(e) = session.initialize().await {
        tracing::warn!(error = %e, "could not restore session");
    }
    session.identity()
}
