//! # Session store
//!
//! Single source of truth for "who is using the app right now". The store
//! starts signed out and only trusts a token once `GET /auth/me` has accepted
//! it, so a token sitting in durable storage is never exposed before
//! [`SessionStore::initialize`] has validated it.
//!
//! | Operation | Effect on success | Effect on failure |
//! |-----------|-------------------|-------------------|
//! | [`initialize`](SessionStore::initialize) | adopt stored token, refresh cached identity | drop stored token and identity |
//! | [`login`](SessionStore::login) / [`signup`](SessionStore::signup) | persist token + identity, adopt them | nothing changes |
//! | [`logout`](SessionStore::logout) | clear memory and durable copies | cannot fail |
//!
//! Readers that only need to know the current session (the favourites store,
//! UI components) hold a [`SessionHandle`] instead of the store itself.
//!
//! A login that completes while [`initialize`](SessionStore::initialize) is
//! still validating an older token wins: the stale validation result is
//! discarded instead of overwriting or clearing the newer session.

use std::sync::{Arc, PoisonError, RwLock};

use store::{load_json, save_json, KeyValueStore, AUTH_TOKEN_KEY, USER_KEY};

use crate::auth::AuthBackend;
use crate::error::ApiError;
use crate::models::Identity;

/// In-memory session. Both fields are set together or not at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub token: Option<String>,
}

/// Read-only view of the current session.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    state: Arc<RwLock<SessionState>>,
}

impl SessionHandle {
    pub fn snapshot(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.snapshot().identity
    }

    /// Validated bearer token, if signed in.
    pub fn token(&self) -> Option<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .identity
            .is_some()
    }

    fn replace(&self, next: SessionState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = next;
    }
}

struct Inner<S, B> {
    storage: S,
    backend: B,
    session: SessionHandle,
}

/// Owns the session lifecycle. Clones share state.
pub struct SessionStore<S, B> {
    inner: Arc<Inner<S, B>>,
}

impl<S, B> Clone for SessionStore<S, B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore, B: AuthBackend> SessionStore<S, B> {
    pub fn new(storage: S, backend: B) -> Self {
        Self {
            inner: Arc::new(Inner {
                storage,
                backend,
                session: SessionHandle::default(),
            }),
        }
    }

    pub fn handle(&self) -> SessionHandle {
        self.inner.session.clone()
    }

    pub fn backend(&self) -> &B {
        &self.inner.backend
    }

    pub fn identity(&self) -> Option<Identity> {
        self.inner.session.identity()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.session.is_authenticated()
    }

    /// Validate the stored token, if any.
    ///
    /// Returns `Ok(None)` when nothing was stored. On failure the stored token
    /// and identity are removed and the error is returned for logging; the
    /// store stays signed out. If a login completed while the stored token was
    /// being checked, the result for the stale token is ignored and the newer
    /// session's identity is returned.
    pub async fn initialize(&self) -> Result<Option<Identity>, ApiError> {
        let Some(token) = load_json::<String, _>(&self.inner.storage, AUTH_TOKEN_KEY).await else {
            tracing::debug!("no stored session");
            return Ok(None);
        };

        match self.inner.backend.me(&token).await {
            Ok(identity) => {
                if self.superseded_by_newer_login(&token) {
                    return Ok(self.identity());
                }
                save_json(&self.inner.storage, USER_KEY, &identity).await;
                self.adopt(token, identity.clone());
                tracing::info!(user_id = identity.id, "restored session");
                Ok(Some(identity))
            }
            Err(e) => {
                if self.superseded_by_newer_login(&token) {
                    tracing::debug!(error = %e, "stale stored session rejected after a newer login");
                    return Ok(self.identity());
                }
                tracing::warn!(error = %e, kind = ?e.kind(), "stored session rejected, signing out");
                self.clear_durable().await;
                Err(e)
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, ApiError> {
        let token = self
            .inner
            .backend
            .login(email, password)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "login failed"))?;
        self.establish(token).await
    }

    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<Identity, ApiError> {
        let token = self
            .inner
            .backend
            .signup(name, email, password)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "signup failed"))?;
        self.establish(token).await
    }

    /// Forget the session locally. The backend is not contacted.
    pub async fn logout(&self) {
        self.inner.session.replace(SessionState::default());
        self.inner.backend.token_changed(None);
        self.clear_durable().await;
        tracing::info!("signed out");
    }

    /// Sign out if `error` says the backend no longer accepts our token.
    /// Returns whether a sign-out happened.
    pub async fn handle_unauthorized(&self, error: &ApiError) -> bool {
        if !error.is_unauthorized() || !self.is_authenticated() {
            return false;
        }
        tracing::warn!(error = %error, "session token rejected by backend");
        self.logout().await;
        true
    }

    /// Fetch the identity for a fresh token, then commit both.
    /// Nothing is written unless both calls succeeded.
    async fn establish(&self, token: String) -> Result<Identity, ApiError> {
        let identity = self
            .inner
            .backend
            .me(&token)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "identity lookup failed after login"))?;

        save_json(&self.inner.storage, AUTH_TOKEN_KEY, &token).await;
        save_json(&self.inner.storage, USER_KEY, &identity).await;
        self.adopt(token, identity.clone());
        tracing::info!(user_id = identity.id, "signed in");
        Ok(identity)
    }

    fn adopt(&self, token: String, identity: Identity) {
        self.inner.backend.token_changed(Some(&token));
        self.inner.session.replace(SessionState {
            identity: Some(identity),
            token: Some(token),
        });
    }

    fn superseded_by_newer_login(&self, validated: &str) -> bool {
        matches!(self.inner.session.token(), Some(current) if current != validated)
    }

    async fn clear_durable(&self) {
        self.inner.storage.remove(AUTH_TOKEN_KEY).await;
        self.inner.storage.remove(USER_KEY).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::FakeBackend;
    use store::MemoryStore;

    fn backend() -> FakeBackend {
        FakeBackend::with_account("ada@example.com", "correct horse", Some("Ada"))
    }

    #[tokio::test]
    async fn test_initialize_without_token_is_signed_out() {
        let session = SessionStore::new(MemoryStore::new(), backend());

        assert_eq!(session.initialize().await.unwrap(), None);
        assert!(!session.is_authenticated());
        assert!(session.handle().token().is_none());
    }

    #[tokio::test]
    async fn test_initialize_with_valid_token_restores_identity() {
        let storage = MemoryStore::new();
        let backend = backend();
        let token = backend.issue_token("ada@example.com");
        save_json(&storage, AUTH_TOKEN_KEY, &token).await;

        let session = SessionStore::new(storage.clone(), backend.clone());
        // Not trusted before validation
        assert!(session.handle().token().is_none());

        let identity = session.initialize().await.unwrap().unwrap();
        assert_eq!(identity.email, "ada@example.com");
        assert_eq!(session.identity(), Some(identity.clone()));
        assert_eq!(session.handle().token(), Some(token.clone()));
        assert_eq!(backend.adopted_token(), Some(token));

        // Cached identity refreshed
        let cached: Identity = load_json(&storage, USER_KEY).await.unwrap();
        assert_eq!(cached, identity);
    }

    #[tokio::test]
    async fn test_initialize_with_rejected_token_clears_storage() {
        let storage = MemoryStore::new();
        save_json(&storage, AUTH_TOKEN_KEY, "expired").await;
        storage
            .set(USER_KEY, r#"{"id":1,"email":"old@example.com"}"#.to_string())
            .await;

        let session = SessionStore::new(storage.clone(), backend());
        let err = session.initialize().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert!(!session.is_authenticated());
        assert!(storage.get(AUTH_TOKEN_KEY).await.is_none());
        assert!(storage.get(USER_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_initialize_offline_also_signs_out() {
        let storage = MemoryStore::new();
        let backend = backend();
        let token = backend.issue_token("ada@example.com");
        save_json(&storage, AUTH_TOKEN_KEY, &token).await;
        backend.set_offline(true);

        let session = SessionStore::new(storage.clone(), backend);
        let err = session.initialize().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(!session.is_authenticated());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_login_persists_and_survives_reload() {
        let storage = MemoryStore::new();
        let backend = backend();
        let session = SessionStore::new(storage.clone(), backend.clone());

        let identity = session.login("ada@example.com", "correct horse").await.unwrap();
        assert_eq!(identity.display_name(), "Ada");
        assert!(session.is_authenticated());
        assert!(storage.get(AUTH_TOKEN_KEY).await.is_some());
        assert_eq!(backend.adopted_token(), session.handle().token());

        // Simulate a page reload
        let reloaded = SessionStore::new(storage.clone(), backend.clone());
        assert!(!reloaded.is_authenticated());
        let restored = reloaded.initialize().await.unwrap();
        assert_eq!(restored, Some(identity));
    }

    #[tokio::test]
    async fn test_bad_credentials_leave_prior_session_untouched() {
        let storage = MemoryStore::new();
        let session = SessionStore::new(storage.clone(), backend());
        let identity = session.login("ada@example.com", "correct horse").await.unwrap();
        let token_before = storage.get(AUTH_TOKEN_KEY).await;

        let err = session.login("ada@example.com", "wrong").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);

        assert_eq!(session.identity(), Some(identity));
        assert_eq!(storage.get(AUTH_TOKEN_KEY).await, token_before);
    }

    #[tokio::test]
    async fn test_bad_credentials_when_signed_out_store_nothing() {
        let storage = MemoryStore::new();
        let session = SessionStore::new(storage.clone(), backend());

        assert!(session.login("nobody@example.com", "x").await.is_err());
        assert!(!session.is_authenticated());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_failed_identity_lookup_after_login_commits_nothing() {
        let storage = MemoryStore::new();
        let backend = backend();
        backend.set_identity_lookup_failing(true);
        let session = SessionStore::new(storage.clone(), backend.clone());

        let err = session.login("ada@example.com", "correct horse").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Server);
        assert!(!session.is_authenticated());
        assert!(storage.get(AUTH_TOKEN_KEY).await.is_none());
        assert!(backend.adopted_token().is_none());
    }

    #[tokio::test]
    async fn test_signup_signs_in_new_account() {
        let storage = MemoryStore::new();
        let session = SessionStore::new(storage.clone(), backend());

        let identity = session
            .signup("Grace", "grace@example.com", "hopper123")
            .await
            .unwrap();
        assert_eq!(identity.name.as_deref(), Some("Grace"));
        assert_eq!(session.identity(), Some(identity));
        assert!(storage.get(AUTH_TOKEN_KEY).await.is_some());

        // Same email again is rejected and keeps the current session
        let err = session
            .signup("Other", "grace@example.com", "whatever1")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(session.identity().unwrap().email, "grace@example.com");
    }

    #[tokio::test]
    async fn test_logout_clears_memory_and_storage() {
        let storage = MemoryStore::new();
        let backend = backend();
        let session = SessionStore::new(storage.clone(), backend.clone());
        session.login("ada@example.com", "correct horse").await.unwrap();

        session.logout().await;

        assert!(!session.is_authenticated());
        assert_eq!(session.handle().snapshot(), SessionState::default());
        assert!(storage.get(AUTH_TOKEN_KEY).await.is_none());
        assert!(storage.get(USER_KEY).await.is_none());
        assert!(backend.adopted_token().is_none());

        // A reload after logout stays signed out
        let reloaded = SessionStore::new(storage, backend);
        assert_eq!(reloaded.initialize().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unauthorized_error_forces_sign_out() {
        let session = SessionStore::new(MemoryStore::new(), backend());
        session.login("ada@example.com", "correct horse").await.unwrap();

        assert!(!session.handle_unauthorized(&ApiError::Timeout).await);
        assert!(session.is_authenticated());

        let rejected = ApiError::from_status(401, "token expired");
        assert!(session.handle_unauthorized(&rejected).await);
        assert!(!session.is_authenticated());

        // Already signed out: nothing to do
        assert!(!session.handle_unauthorized(&rejected).await);
    }

    #[tokio::test]
    async fn test_stale_validation_does_not_clobber_newer_login() {
        let storage = MemoryStore::new();
        let backend = backend();
        save_json(&storage, AUTH_TOKEN_KEY, "expired").await;
        let session = SessionStore::new(storage.clone(), backend.clone());

        // `me("expired")` stays pending until the login has landed
        let gate = backend.hold_identity_lookup("expired");
        let (restored, identity) = tokio::join!(session.initialize(), async {
            let identity = session.login("ada@example.com", "correct horse").await.unwrap();
            gate.notify_one();
            identity
        });

        // The newer session wins and is reported as the outcome
        assert_eq!(restored.unwrap(), Some(identity.clone()));
        assert_eq!(session.identity(), Some(identity));
        let stored: String = load_json(&storage, AUTH_TOKEN_KEY).await.unwrap();
        assert_eq!(session.handle().token(), Some(stored));
        assert!(storage.get(USER_KEY).await.is_some());
    }
}
