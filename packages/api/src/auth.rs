//! Backend seams used by the session and favourites stores.
//!
//! The stores only see these traits, so tests drive them with in-memory
//! fakes and the app drives them with [`ApiClient`].

use std::future::Future;

use reqwest::{Method, RequestBuilder};

use crate::client::{ApiClient, Bearer, Endpoint};
use crate::error::ApiError;
use crate::models::{AuthToken, FavoritesPayload, Identity, LoginRequest, SignupRequest};

/// Credential exchange and identity lookup.
pub trait AuthBackend {
    /// `POST /auth/login`, returning the bearer token.
    fn login(&self, email: &str, password: &str) -> impl Future<Output = Result<String, ApiError>>;

    /// `POST /auth/signup`, returning the bearer token.
    fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<String, ApiError>>;

    /// `GET /auth/me` with an explicit token.
    fn me(&self, token: &str) -> impl Future<Output = Result<Identity, ApiError>>;

    /// Called whenever the session adopts or drops a token.
    fn token_changed(&self, _token: Option<&str>) {}
}

/// Remote copy of the favourite set.
pub trait FavoritesBackend {
    /// Overwrite the remote set with `favorites`.
    fn push_favorites(
        &self,
        token: &str,
        favorites: &[String],
    ) -> impl Future<Output = Result<(), ApiError>>;
}

impl ApiClient {
    // Credential exchanges never carry a previous session's token.
    fn login_request(&self, email: &str, password: &str) -> RequestBuilder {
        self.request(Method::POST, Endpoint::Auth, "auth/login", Bearer::Anonymous)
            .json(&LoginRequest { email, password })
    }

    fn signup_request(&self, name: &str, email: &str, password: &str) -> RequestBuilder {
        let body = SignupRequest {
            name,
            email,
            password,
        };
        self.request(Method::POST, Endpoint::Auth, "auth/signup", Bearer::Anonymous)
            .json(&body)
    }
}

impl AuthBackend for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let token: AuthToken = self.execute(self.login_request(email, password)).await?;
        Ok(token.auth_token)
    }

    async fn signup(&self, name: &str, email: &str, password: &str) -> Result<String, ApiError> {
        let token: AuthToken = self
            .execute(self.signup_request(name, email, password))
            .await?;
        Ok(token.auth_token)
    }

    async fn me(&self, token: &str) -> Result<Identity, ApiError> {
        let builder = self.request(Method::GET, Endpoint::Auth, "auth/me", Bearer::Token(token));
        self.execute(builder).await
    }

    fn token_changed(&self, token: Option<&str>) {
        self.set_token(token.map(str::to_string));
    }
}

impl FavoritesBackend for ApiClient {
    async fn push_favorites(&self, token: &str, favorites: &[String]) -> Result<(), ApiError> {
        let body = FavoritesPayload {
            favorites: favorites.to_vec(),
        };
        let builder = self
            .request(Method::POST, Endpoint::Data, "favorite_hotel", Bearer::Token(token))
            .json(&body);
        self.execute_unit(builder).await
    }
}
