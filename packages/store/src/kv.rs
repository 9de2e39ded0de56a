//! # Durable key/value storage
//!
//! Everything the client keeps across reloads (session token, cached identity,
//! favourite hotels) is a string value under a well-known string key. The
//! [`KeyValueStore`] trait is the only seam the rest of the workspace sees, so
//! the same session and favourites logic runs against:
//!
//! | Backend | Where |
//! |---------|-------|
//! | [`crate::MemoryStore`] | tests, and platforms without persistent storage |
//! | [`crate::FileStore`] | desktop / native, one file per key |
//! | [`crate::IdbStore`] | browser IndexedDB (`web` feature) |
//!
//! Implementations swallow their own I/O failures: reads of unavailable data
//! return `None` and failed writes are logged. Local storage going away must
//! degrade to "nothing stored", never to a crashed UI.

use std::future::Future;

/// Async string key/value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl Future<Output = Option<String>>;
    fn set(&self, key: &str, value: String) -> impl Future<Output = ()>;
    fn remove(&self, key: &str) -> impl Future<Output = ()>;
}
