//! # Local persistent state
//!
//! [`LocalStorage`] is a small string key/value interface modelled on the browser's
//! `localStorage`. It holds the registered-user collection, the session marker and
//! the mirrored invoice collection, each JSON-serialised under a fixed key.
//!
//! ## Implementations
//!
//! | Type | Lifetime of data | Used by |
//! |------|------------------|---------|
//! | [`MemoryStorage`] | the instance | tests, throwaway sessions |
//! | [`FileStorage`] | survives restarts | desktop and server processes |
//! | `WebStorage` | the browser profile | `wasm32` builds with the `web` feature |
//!
//! ## FileStorage layout
//!
//! ```text
//! <base_dir>/
//! ├── nexlance_users       # JSON array of registered users
//! ├── nexlance_auth        # "1" while a session is active
//! ├── nexlance_user        # {"name": ..., "email": ...}
//! └── nexlance_invoices    # mirrored fallback invoices
//! ```
//!
//! Reads never fail: a missing or unreadable key is `None`, matching how the
//! browser API behaves when storage is disabled.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StoreResult;

/// String key/value persistence.
pub trait LocalStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&self, key: &str) -> StoreResult<()>;
}

impl<T: LocalStorage + ?Sized> LocalStorage for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

/// Storage handle shared between the account service and the fallback store.
pub type SharedStorage = Arc<dyn LocalStorage + Send + Sync>;

/// In-memory storage for tests and ephemeral sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

/// Filesystem-backed storage: one file per key under a base directory.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl LocalStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read local key {}: {}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        match std::fs::remove_file(self.key_path(key)) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("nexlance_auth"), None);

        storage.set("nexlance_auth", "1").unwrap();
        assert_eq!(storage.get("nexlance_auth").as_deref(), Some("1"));

        // Clones share the same entries
        let other = storage.clone();
        other.remove("nexlance_auth").unwrap();
        assert_eq!(storage.get("nexlance_auth"), None);
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("nexlance");

        let storage = FileStorage::new(&base);
        storage.set("nexlance_users", "[]").unwrap();

        let reopened = FileStorage::new(&base);
        assert_eq!(reopened.get("nexlance_users").as_deref(), Some("[]"));

        reopened.remove("nexlance_users").unwrap();
        assert_eq!(storage.get("nexlance_users"), None);
        // Removing twice is fine
        reopened.remove("nexlance_users").unwrap();
    }
}
