//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that keeps each entry
//! in its own file. It is used on native platforms so the session and
//! favourites survive an app restart.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── authToken.json
//! ├── favorites.json
//! └── user.json
//! ```
//!
//! ## Platform data directories
//!
//! Callers pick the base, usually under `dirs::data_dir()`:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/staylist/` |
//! | Linux | `~/.local/share/staylist/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\staylist\` |

use std::path::PathBuf;

use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Keys become file names; anything outside `[A-Za-z0-9_-]` is replaced
    /// so a key can never escape the base directory.
    fn entry_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base.join(format!("{name}.json"))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    async fn set(&self, key: &str, value: String) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!(base = %self.base.display(), error = %e, "cannot create store directory");
            return;
        }
        if let Err(e) = std::fs::write(self.entry_path(key), value) {
            tracing::warn!(key, error = %e, "failed to write store entry");
        }
    }

    async fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}
