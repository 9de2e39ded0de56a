//! HTTP client for the hosted backend.
//!
//! [`ApiClient`] owns one `reqwest::Client` plus a shared, refreshable bearer
//! token slot. The session store fills the slot after a validated login and
//! clears it on logout; resource calls read it on every request. Auth calls
//! choose their [`Bearer`] explicitly: `login`/`signup` go out anonymous and
//! `me` during validation carries the token being checked.
//!
//! Every non-2xx answer becomes an [`ApiError`] classified by status; response
//! bodies are decoded only on success.

use std::sync::{Arc, PoisonError, RwLock};

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Which endpoint group a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint {
    Data,
    Auth,
}

/// Which token, if any, a request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bearer<'a> {
    /// Whatever the shared slot holds.
    Session,
    Token(&'a str),
    Anonymous,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout());
        let http = builder.build().unwrap_or_default();

        Self {
            http,
            config,
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Replace the bearer token used by resource calls.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn url(&self, endpoint: Endpoint, path: &str) -> String {
        let base = match endpoint {
            Endpoint::Data => &self.config.base_url,
            Endpoint::Auth => &self.config.auth_base_url,
        };
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Start a request to `path` under the endpoint's base URL.
    pub(crate) fn request(
        &self,
        method: Method,
        endpoint: Endpoint,
        path: &str,
        bearer: Bearer<'_>,
    ) -> RequestBuilder {
        self.build(method, self.url(endpoint, path), bearer)
    }

    /// Like [`request`](Self::request), but each segment is percent-encoded
    /// so caller-supplied ids cannot add path components or a query.
    pub(crate) fn request_segments(
        &self,
        method: Method,
        endpoint: Endpoint,
        segments: &[&str],
        bearer: Bearer<'_>,
    ) -> RequestBuilder {
        let target = match reqwest::Url::parse(&self.url(endpoint, "")) {
            Ok(mut url) => {
                if let Ok(mut path) = url.path_segments_mut() {
                    path.pop_if_empty().extend(segments);
                }
                url.to_string()
            }
            Err(_) => self.url(endpoint, &segments.join("/")),
        };
        self.build(method, target, bearer)
    }

    fn build(&self, method: Method, url: String, bearer: Bearer<'_>) -> RequestBuilder {
        let builder = self
            .http
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");

        let token = match bearer {
            Bearer::Session => self.token(),
            Bearer::Token(token) => Some(token.to_string()),
            Bearer::Anonymous => None,
        };
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and decode a JSON body.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let bytes = self.send(builder).await?;
        decode_body(&bytes)
    }

    /// Send and ignore whatever body comes back.
    pub(crate) async fn execute_unit(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.send(builder).await.map(|_| ())
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "backend returned an error status");
            return Err(ApiError::from_status(status.as_u16(), message));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Decode a success body. An empty body decodes as JSON `null`, so endpoints
/// that answer `204 No Content` work with `Option<_>` or `serde_json::Value`.
pub(crate) fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_str("null")?);
    }
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::Hotel;

    #[test]
    fn test_url_joins_without_double_slashes() {
        let client = ApiClient::new(
            ApiConfig::new("https://hotels.example.com/api/")
                .with_auth_base_url("https://auth.example.com/api:group"),
        );
        assert_eq!(
            client.url(Endpoint::Data, "/hotel/3"),
            "https://hotels.example.com/api/hotel/3"
        );
        assert_eq!(
            client.url(Endpoint::Auth, "auth/me"),
            "https://auth.example.com/api:group/auth/me"
        );
    }

    #[test]
    fn test_token_slot_is_shared_between_clones() {
        let client = ApiClient::new(ApiConfig::default());
        let clone = client.clone();

        client.set_token(Some("abc".to_string()));
        assert_eq!(clone.token().as_deref(), Some("abc"));

        clone.set_token(None);
        assert!(client.token().is_none());
    }

    #[test]
    fn test_bearer_header_prefers_explicit_token() {
        let client = ApiClient::new(ApiConfig::default());
        client.set_token(Some("shared".to_string()));

        let request = client
            .request(Method::GET, Endpoint::Auth, "auth/me", Bearer::Token("explicit"))
            .build()
            .unwrap();
        assert_eq!(
            request.headers()[reqwest::header::AUTHORIZATION],
            "Bearer explicit"
        );

        let request = client
            .request(Method::GET, Endpoint::Data, "hotel", Bearer::Session)
            .build()
            .unwrap();
        assert_eq!(
            request.headers()[reqwest::header::AUTHORIZATION],
            "Bearer shared"
        );

        let request = client
            .request(Method::POST, Endpoint::Auth, "auth/login", Bearer::Anonymous)
            .build()
            .unwrap();
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_anonymous_request_has_no_auth_header() {
        let client = ApiClient::new(ApiConfig::default());
        let request = client
            .request(Method::GET, Endpoint::Data, "hotel", Bearer::Session)
            .build()
            .unwrap();
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_segments_are_percent_encoded() {
        let client = ApiClient::new(ApiConfig::new("https://hotels.example.com/api/"));
        let request = client
            .request_segments(
                Method::GET,
                Endpoint::Data,
                &["whatsapp", "messages", "a/b?c#d", "status"],
                Bearer::Session,
            )
            .build()
            .unwrap();
        assert_eq!(
            request.url().path(),
            "/api/whatsapp/messages/a%2Fb%3Fc%23d/status"
        );
        assert!(request.url().query().is_none());
    }

    #[test]
    fn test_decode_body() {
        let hotels: Vec<Hotel> = decode_body(br#"[{"id":1,"name":"Axum Palace"}]"#).unwrap();
        assert_eq!(hotels[0].name, "Axum Palace");

        let empty: Option<Hotel> = decode_body(b"  ").unwrap();
        assert!(empty.is_none());

        let err = decode_body::<Vec<Hotel>>(br#"{"message":"oops"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
