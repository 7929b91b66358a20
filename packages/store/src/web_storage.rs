//! # Browser localStorage
//!
//! [`WebStorage`] is the [`LocalStorage`] implementation used on the **web
//! platform**. It forwards to `window.localStorage` through `web-sys`, so the
//! user collection, session marker and invoice mirror live in the same place the
//! dashboard pages read them from.
//!
//! Like the rest of the local layer, reads swallow errors: private browsing
//! modes and disabled storage degrade to "no data".

use crate::error::{StoreError, StoreResult};
use crate::local::LocalStorage;

/// `window.localStorage`-backed storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> StoreResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or_else(|| StoreError::Unavailable("window.localStorage".to_string()))
    }
}

impl LocalStorage for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}
