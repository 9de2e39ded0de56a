//! # Client configuration: `staylist.toml`
//!
//! Where the backend lives and how long to wait for it. The same struct is
//! read from a TOML file (filename [`ApiConfig::filename`]) or from the
//! environment on native builds.
//!
//! ```toml
//! base_url = "https://backend.example.com/api"       # data endpoints
//! auth_base_url = "https://backend.example.com/auth" # /auth/login, /auth/me, /auth/signup
//! timeout_secs = 15                                  # per request
//! ```
//!
//! Every field has a default, so an empty file is a valid configuration.
//!
//! ## Environment
//!
//! | Variable | Field |
//! |----------|-------|
//! | `STAYLIST_API_URL` | `base_url` |
//! | `STAYLIST_AUTH_URL` | `auth_base_url` (falls back to `STAYLIST_API_URL`) |
//! | `STAYLIST_TIMEOUT_SECS` | `timeout_secs` |

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the data endpoints (`/hotel`, `/booking`, ...).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL for the auth group (`/auth/login`, `/auth/me`, `/auth/signup`).
    #[serde(default = "default_base_url")]
    pub auth_base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Config pointing both endpoint groups at one base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            auth_base_url: base_url.clone(),
            base_url,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Builder method to use a separate auth base URL.
    pub fn with_auth_base_url(mut self, url: impl Into<String>) -> Self {
        self.auth_base_url = url.into();
        self
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "staylist.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load overrides from the environment (and a `.env` file, if present).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("STAYLIST_API_URL").unwrap_or_else(|_| default_base_url());
        let auth_base_url = std::env::var("STAYLIST_AUTH_URL").unwrap_or_else(|_| base_url.clone());
        let timeout_secs = std::env::var("STAYLIST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(default_timeout_secs);

        Self {
            base_url,
            auth_base_url,
            timeout_secs,
        }
    }
}
