//! Runtime backend selection.
//!
//! [`AnyStore`] is chosen once, at construction: the remote store when the
//! backend is configured and its client initialises, otherwise the fallback.

use crate::config::BackendConfig;
use crate::error::StoreResult;
use crate::memory::MemoryStore;
use crate::models::EntityKind;
use crate::record::{Filter, Record};
use crate::remote::RemoteStore;
use crate::repo::EntityStore;

/// Either backend behind one EntityStore.
#[derive(Clone)]
pub enum AnyStore {
    Remote(RemoteStore),
    Fallback(MemoryStore),
}

impl AnyStore {
    /// Pick the backend for `config`; `fallback` builds the store used when the
    /// remote one is unavailable.
    pub fn select(config: &BackendConfig, fallback: impl FnOnce() -> MemoryStore) -> Self {
        if !config.is_configured() {
            tracing::info!("Backend not configured, using sample data");
            return AnyStore::Fallback(fallback());
        }
        match RemoteStore::new(config) {
            Ok(remote) => {
                tracing::info!("Using remote backend at {}", config.url);
                AnyStore::Remote(remote)
            }
            Err(e) => {
                tracing::warn!("Backend init failed, using sample data: {}", e);
                AnyStore::Fallback(fallback())
            }
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, AnyStore::Remote(_))
    }
}

impl EntityStore for AnyStore {
    async fn fetch_all(&self, kind: EntityKind, filter: Option<&Filter>) -> Vec<Record> {
        match self {
            AnyStore::Remote(s) => s.fetch_all(kind, filter).await,
            AnyStore::Fallback(s) => s.fetch_all(kind, filter).await,
        }
    }

    async fn add(&self, kind: EntityKind, fields: Record) -> StoreResult<Record> {
        match self {
            AnyStore::Remote(s) => s.add(kind, fields).await,
            AnyStore::Fallback(s) => s.add(kind, fields).await,
        }
    }

    async fn update(&self, kind: EntityKind, id: &str, patch: Record) -> StoreResult<Option<Record>> {
        match self {
            AnyStore::Remote(s) => s.update(kind, id, patch).await,
            AnyStore::Fallback(s) => s.update(kind, id, patch).await,
        }
    }

    async fn delete(&self, kind: EntityKind, id: &str) -> StoreResult<()> {
        match self {
            AnyStore::Remote(s) => s.delete(kind, id).await,
            AnyStore::Fallback(s) => s.delete(kind, id).await,
        }
    }

    async fn log_activity(&self, description: &str, user_name: &str) {
        match self {
            AnyStore::Remote(s) => s.log_activity(description, user_name).await,
            AnyStore::Fallback(s) => s.log_activity(description, user_name).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_config_selects_fallback() {
        let store = AnyStore::select(&BackendConfig::default(), MemoryStore::seeded);
        assert!(!store.is_remote());
    }

    #[test]
    fn test_unparseable_url_selects_fallback() {
        let config = BackendConfig::new("::bad::", "real-key");
        assert!(config.is_configured());
        let store = AnyStore::select(&config, MemoryStore::seeded);
        assert!(!store.is_remote());
    }

    #[test]
    fn test_configured_backend_selects_remote() {
        let config = BackendConfig::new("https://abcd.supabase.co", "real-key");
        let store = AnyStore::select(&config, MemoryStore::seeded);
        assert!(store.is_remote());
    }

    #[tokio::test]
    async fn test_fallback_operations_never_fail() {
        let store = AnyStore::select(&BackendConfig::default(), MemoryStore::seeded);
        let added = store
            .add(EntityKind::Invoice, Record::new().with("amount", 100))
            .await
            .unwrap();
        let id = added.id().unwrap().to_string();
        assert!(id.starts_with('i'));
        store
            .update(EntityKind::Invoice, &id, Record::new().with("status", "paid"))
            .await
            .unwrap();
        store.delete(EntityKind::Invoice, &id).await.unwrap();
        store.log_activity("Deleted invoice", "Admin").await;
        assert_eq!(store.fetch_all(EntityKind::Invoice, None).await.len(), 5);
    }
}
