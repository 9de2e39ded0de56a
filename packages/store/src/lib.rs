pub mod durable;
pub mod favorites;
pub mod kv;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod idb;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use idb::IdbStore;

pub use durable::{load_json, save_json, AUTH_TOKEN_KEY, FAVORITES_KEY, USER_KEY};
pub use favorites::FavoriteSet;
pub use kv::KeyValueStore;
