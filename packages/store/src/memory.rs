use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and platforms without durable storage.
///
/// Clones share the same entries, which lets tests simulate a page reload by
/// building a second store over a clone.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    async fn set(&self, key: &str, value: String) {
        self.entries().insert(key.to_string(), value);
    }

    async fn remove(&self, key: &str) {
        self.entries().remove(key);
    }
}
