//! In-memory backend for store tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::Notify;

use crate::auth::{AuthBackend, FavoritesBackend};
use crate::error::ApiError;
use crate::models::Identity;

#[derive(Default)]
struct FakeState {
    accounts: Vec<(String, Identity)>,
    tokens: HashMap<String, Identity>,
    issued: u64,
    offline: bool,
    identity_lookup_failing: bool,
    push_failing: bool,
    pushes: Vec<(String, Vec<String>)>,
    adopted: Option<String>,
    held: Option<(String, Arc<Notify>)>,
}

/// Accepts `email`/`password` pairs it was seeded with and hands out opaque
/// tokens. Records every favourites push.
#[derive(Clone, Default)]
pub(crate) struct FakeBackend {
    state: Arc<Mutex<FakeState>>,
}

impl FakeBackend {
    pub(crate) fn with_account(email: &str, password: &str, name: Option<&str>) -> Self {
        let backend = Self::default();
        backend.add_account(name, email, password);
        backend
    }

    fn state(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn add_account(&self, name: Option<&str>, email: &str, password: &str) -> Identity {
        let mut state = self.state();
        let identity = Identity {
            id: state.accounts.len() as i64 + 1,
            email: email.to_string(),
            name: name.map(str::to_string),
            created_at: Some(1_700_000_000_000),
        };
        state
            .accounts
            .push((format!("{email}:{password}"), identity.clone()));
        identity
    }

    /// Mint a valid token for an existing account.
    pub(crate) fn issue_token(&self, email: &str) -> String {
        let mut state = self.state();
        let identity = state
            .accounts
            .iter()
            .find(|(_, identity)| identity.email == email)
            .map(|(_, identity)| identity.clone())
            .expect("unknown account");
        state.issued += 1;
        let token = format!("tok-{}-{}", identity.id, state.issued);
        state.tokens.insert(token.clone(), identity);
        token
    }

    pub(crate) fn set_offline(&self, offline: bool) {
        self.state().offline = offline;
    }

    pub(crate) fn set_identity_lookup_failing(&self, failing: bool) {
        self.state().identity_lookup_failing = failing;
    }

    pub(crate) fn set_push_failing(&self, failing: bool) {
        self.state().push_failing = failing;
    }

    /// Make `me(token)` wait until the returned gate is notified.
    pub(crate) fn hold_identity_lookup(&self, token: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.state().held = Some((token.to_string(), Arc::clone(&gate)));
        gate
    }

    pub(crate) fn pushes(&self) -> Vec<(String, Vec<String>)> {
        self.state().pushes.clone()
    }

    pub(crate) fn adopted_token(&self) -> Option<String> {
        self.state().adopted.clone()
    }

    fn check_online(&self) -> Result<(), ApiError> {
        if self.state().offline {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(())
    }
}

impl AuthBackend for FakeBackend {
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        self.check_online()?;
        let key = format!("{email}:{password}");
        let known = self.state().accounts.iter().any(|(k, _)| *k == key);
        if !known {
            return Err(ApiError::from_status(401, "Invalid credentials"));
        }
        Ok(self.issue_token(email))
    }

    async fn signup(&self, name: &str, email: &str, password: &str) -> Result<String, ApiError> {
        self.check_online()?;
        let taken = self
            .state()
            .accounts
            .iter()
            .any(|(_, identity)| identity.email == email);
        if taken {
            return Err(ApiError::from_status(400, "Email already registered"));
        }
        self.add_account(Some(name), email, password);
        Ok(self.issue_token(email))
    }

    async fn me(&self, token: &str) -> Result<Identity, ApiError> {
        let gate = match &self.state().held {
            Some((held, gate)) if held == token => Some(Arc::clone(gate)),
            _ => None,
        };
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.check_online()?;
        let state = self.state();
        if state.identity_lookup_failing {
            return Err(ApiError::from_status(500, "internal error"));
        }
        state
            .tokens
            .get(token)
            .cloned()
            .ok_or_else(|| ApiError::from_status(401, "Invalid token"))
    }

    fn token_changed(&self, token: Option<&str>) {
        self.state().adopted = token.map(str::to_string);
    }
}

impl FavoritesBackend for FakeBackend {
    async fn push_favorites(&self, token: &str, favorites: &[String]) -> Result<(), ApiError> {
        let mut state = self.state();
        state.pushes.push((token.to_string(), favorites.to_vec()));
        if state.push_failing || state.offline {
            return Err(ApiError::from_status(503, "unavailable"));
        }
        Ok(())
    }
}
