//! # Signed-in visitor
//!
//! [`Identity`] is the record returned by `GET /auth/me`. It is cached in
//! durable storage under `store::USER_KEY` and owned by the session store;
//! nothing else mutates it.
//!
//! `created_at` is whatever the backend sends, epoch milliseconds in practice.
//! The helper [`Identity::display_name`] returns the visitor's name or falls
//! back to their email address.

use serde::{Deserialize, Serialize};

/// The authenticated visitor's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: i64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl Identity {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

/// Body of a successful `/auth/login` or `/auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthToken {
    #[serde(rename = "authToken")]
    pub auth_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_from_backend_json() {
        let identity: Identity = serde_json::from_str(
            r#"{"id":7,"email":"ada@example.com","name":"Ada","created_at":1718000000000}"#,
        )
        .unwrap();
        assert_eq!(identity.id, 7);
        assert_eq!(identity.display_name(), "Ada");
        assert_eq!(identity.created_at, Some(1_718_000_000_000));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let identity: Identity =
            serde_json::from_str(r#"{"id":1,"email":"guest@example.com"}"#).unwrap();
        assert_eq!(identity.display_name(), "guest@example.com");

        let blank = Identity {
            name: Some("  ".to_string()),
            ..identity
        };
        assert_eq!(blank.display_name(), "guest@example.com");
    }

    #[test]
    fn test_auth_token_field_name() {
        let token: AuthToken = serde_json::from_str(r#"{"authToken":"abc.def"}"#).unwrap();
        assert_eq!(token.auth_token, "abc.def");
    }
}
