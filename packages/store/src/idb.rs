//! # IndexedDB key/value store: browser-side persistence
//!
//! [`IdbStore`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. Entries live in the browser's IndexedDB via the [`rexie`] crate,
//! so the session token and favourites survive a page reload.
//!
//! ## Database schema
//!
//! A single IndexedDB database named `"staylist"` (version 1) with one object
//! store `"entries"`: key = entry name (e.g. `"authToken"`), value = the JSON
//! text serialised through `serde_wasm_bindgen`.
//!
//! ## Connection management
//!
//! `IdbStore` only carries the database name and opens a fresh [`Rexie`]
//! connection on every operation. `Rexie` does not implement `Clone`, and the
//! browser caches IndexedDB connections internally.
//!
//! ## Error handling
//!
//! Trait methods swallow errors (`None` for reads, nothing for writes). A
//! corrupted or unavailable IndexedDB degrades to "nothing stored": the visitor
//! ends up signed out with no favourites rather than with a broken page.

use crate::kv::KeyValueStore;
use rexie::{ObjectStore as RexieObjectStore, Rexie, TransactionMode};
use wasm_bindgen::JsValue;

const DEFAULT_DB_NAME: &str = "staylist";
const DB_VERSION: u32 = 1;
const ENTRIES_STORE: &str = "entries";

/// IndexedDB-backed KeyValueStore for the web platform.
#[derive(Clone)]
pub struct IdbStore {
    db_name: String,
}

impl Default for IdbStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IdbStore {
    /// Store using the default `"staylist"` database.
    pub fn new() -> Self {
        Self::with_db_name(DEFAULT_DB_NAME)
    }

    pub fn with_db_name(db_name: &str) -> Self {
        Self {
            db_name: db_name.to_string(),
        }
    }

    async fn open_db(&self) -> Result<Rexie, rexie::Error> {
        Rexie::builder(&self.db_name)
            .version(DB_VERSION)
            .add_object_store(RexieObjectStore::new(ENTRIES_STORE))
            .build()
            .await
    }
}

impl KeyValueStore for IdbStore {
    async fn get(&self, key: &str) -> Option<String> {
        let db = self.open_db().await.ok()?;
        let tx = db
            .transaction(&[ENTRIES_STORE], TransactionMode::ReadOnly)
            .ok()?;
        let store = tx.store(ENTRIES_STORE).ok()?;

        let value = store.get(JsValue::from_str(key)).await.ok()?;
        let js_val = value?;
        serde_wasm_bindgen::from_value(js_val).ok()
    }

    async fn set(&self, key: &str, value: String) {
        let Ok(db) = self.open_db().await else {
            tracing::warn!(key, "IndexedDB unavailable, entry not persisted");
            return;
        };
        let Ok(tx) = db.transaction(&[ENTRIES_STORE], TransactionMode::ReadWrite) else {
            return;
        };
        let Ok(store) = tx.store(ENTRIES_STORE) else {
            return;
        };

        let js_key = JsValue::from_str(key);
        let js_value = JsValue::from_str(&value);
        if let Err(e) = store.put(&js_value, Some(&js_key)).await {
            tracing::warn!(key, error = ?e, "failed to write IndexedDB entry");
        }
        let _ = tx.done().await;
    }

    async fn remove(&self, key: &str) {
        let Ok(db) = self.open_db().await else {
            return;
        };
        let Ok(tx) = db.transaction(&[ENTRIES_STORE], TransactionMode::ReadWrite) else {
            return;
        };
        let Ok(store) = tx.store(ENTRIES_STORE) else {
            return;
        };

        let _ = store.delete(JsValue::from_str(key)).await;
        let _ = tx.done().await;
    }
}
