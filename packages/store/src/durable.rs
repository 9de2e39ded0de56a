//! # Typed JSON entries on top of [`KeyValueStore`]
//!
//! Values are stored as JSON text so that the browser and native stores hold
//! the same bytes. The well-known keys match what the web front end has always
//! written to local storage, so an existing browser profile keeps its session
//! and favourites.
//!
//! | Key | Value |
//! |-----|-------|
//! | [`AUTH_TOKEN_KEY`] | bearer token, JSON string |
//! | [`USER_KEY`] | cached identity record, JSON object |
//! | [`FAVORITES_KEY`] | favourite hotel ids, JSON array |

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::kv::KeyValueStore;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "user";
pub const FAVORITES_KEY: &str = "favorites";

/// Read and decode a JSON value.
///
/// A missing key and an undecodable value both yield `None`; the latter is
/// logged since it means something else wrote to our key.
pub async fn load_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore,
{
    let raw = store.get(key).await?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding undecodable stored value");
            None
        }
    }
}

/// Encode and overwrite a JSON value.
pub async fn save_json<T, S>(store: &S, key: &str, value: &T)
where
    T: Serialize + ?Sized,
    S: KeyValueStore,
{
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, raw).await,
        Err(e) => tracing::error!(key, error = %e, "failed to encode value for storage"),
    }
}
