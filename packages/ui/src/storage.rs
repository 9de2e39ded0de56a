//! Shared storage constructor for all platforms.
//!
//! Returns the [`store::KeyValueStore`] that holds the session token, cached
//! identity and favourites:
//! - **Web** (WASM + `web` feature): IndexedDB via [`store::IdbStore`]
//! - **Desktop / Mobile** (native): one JSON file per key via `store::FileStore`
//! - Anything else falls back to [`store::MemoryStore`], which forgets
//!   everything on exit.

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStorage = store::IdbStore;

#[cfg(not(target_arch = "wasm32"))]
pub type AppStorage = store::FileStore;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type AppStorage = store::MemoryStore;

/// Create the platform-appropriate store.
///
/// Every call opens the same underlying database or directory, so stores
/// created separately still see each other's writes.
pub fn make_storage() -> AppStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::IdbStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("staylist");
        store::FileStore::new(base)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
}
