//! Session and favourites context for the UI.
//!
//! [`SessionProvider`] builds the stores once, opens the favourites and
//! starts their push worker on mount, then restores the stored session.
//! Components reach them through [`use_session`] and [`use_favorites`].

use api::{ApiClient, ApiConfig, ApiError, FavoritesStore, Identity, SessionStore};
use dioxus::prelude::*;

use crate::startup::start_stores;
use crate::storage::{make_storage, AppStorage};

pub type AppSession = SessionStore<AppStorage, ApiClient>;
pub type AppFavorites = FavoritesStore<AppStorage>;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<Identity>,
    /// True until the stored session has been validated or discarded.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Handle returned by [`use_session`].
#[derive(Clone)]
pub struct SessionContext {
    session: AppSession,
    client: ApiClient,
    state: Signal<AuthState>,
    favorites: FavoritesContext,
}

impl SessionContext {
    /// Current state. Subscribes the calling component to changes.
    pub fn state(&self) -> AuthState {
        self.state.cloned()
    }

    pub fn user(&self) -> Option<Identity> {
        self.state.read().user.clone()
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, ApiError> {
        let identity = self.session.login(email, password).await?;
        self.signed_in(identity.clone());
        Ok(identity)
    }

    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<Identity, ApiError> {
        let identity = self.session.signup(name, email, password).await?;
        self.signed_in(identity.clone());
        Ok(identity)
    }

    pub async fn logout(&self) {
        self.session.logout().await;
        self.signed_out();
    }

    /// Pass any error from a backend call here; an expired token signs the
    /// visitor out.
    pub async fn report_error(&self, error: &ApiError) {
        if self.session.handle_unauthorized(error).await {
            self.signed_out();
        }
    }

    async fn start(&self) {
        let favorites = self.favorites;
        let user = start_stores(make_storage(), &self.session, |store, sync| {
            spawn(sync.run());
            favorites.attach(store);
        })
        .await;

        let mut state = self.state;
        state.set(AuthState {
            user,
            loading: false,
        });
    }

    fn signed_in(&self, identity: Identity) {
        let mut state = self.state;
        state.set(AuthState {
            user: Some(identity),
            loading: false,
        });
        // Favourites picked while anonymous follow the visitor into the account
        self.favorites.sync_now();
    }

    fn signed_out(&self) {
        let mut state = self.state;
        state.set(AuthState {
            user: None,
            loading: false,
        });
    }
}

/// Handle returned by [`use_favorites`].
#[derive(Clone, Copy)]
pub struct FavoritesContext {
    store: Signal<Option<AppFavorites>>,
    ids: Signal<Vec<String>>,
}

impl FavoritesContext {
    pub fn is_loaded(&self) -> bool {
        self.store.read().is_some()
    }

    pub fn is_favorite(&self, hotel_id: &str) -> bool {
        self.ids.read().iter().any(|id| id == hotel_id)
    }

    pub fn favorites(&self) -> Vec<String> {
        self.ids.cloned()
    }

    /// Flip a hotel's membership. Returns the new membership, or `false` if
    /// the favourites have not finished loading.
    pub async fn toggle(&self, hotel_id: &str) -> bool {
        let Some(store) = self.store.cloned() else {
            tracing::warn!(hotel_id, "favourites toggled before they were loaded");
            return false;
        };
        let now_favorite = store.toggle(hotel_id).await;
        let mut ids = self.ids;
        ids.set(store.favorites());
        now_favorite
    }

    fn attach(&self, store: AppFavorites) {
        let mut ids = self.ids;
        ids.set(store.favorites());
        let mut slot = self.store;
        slot.set(Some(store));
    }

    fn sync_now(&self) {
        if let Some(store) = self.store.peek().as_ref() {
            store.sync_now();
        }
    }
}

/// Get the session handle provided by [`SessionProvider`].
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Get the favourites handle provided by [`SessionProvider`].
pub fn use_favorites() -> FavoritesContext {
    use_context::<FavoritesContext>()
}

/// Provider component that owns the session and favourites stores.
/// Wrap your app with this component.
#[component]
pub fn SessionProvider(#[props(default)] config: ApiConfig, children: Element) -> Element {
    let client = use_hook(|| ApiClient::new(config.clone()));
    let session = use_hook(|| SessionStore::new(make_storage(), client.clone()));
    let state = use_signal(AuthState::default);
    let store = use_signal(|| None::<AppFavorites>);
    let ids = use_signal(Vec::<String>::new);

    let favorites = FavoritesContext { store, ids };
    let context = SessionContext {
        session,
        client,
        state,
        favorites,
    };

    // Validate the stored session once on mount
    use_hook({
        let context = context.clone();
        move || {
            spawn(async move { context.start().await });
        }
    });

    use_context_provider(|| context);
    use_context_provider(|| favorites);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: Option<EventHandler<()>>,
) -> Element {
    let session = use_session();

    let onclick = move |_| {
        let session = session.clone();
        async move {
            session.logout().await;
            if let Some(handler) = on_logout {
                handler.call(());
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
