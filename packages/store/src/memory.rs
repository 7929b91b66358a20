use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::error::{StoreError, StoreResult};
use crate::local::SharedStorage;
use crate::models::{ActivityEntry, EntityKind, Placement};
use crate::record::{Filter, Record, CREATED_AT_FIELD, ID_FIELD};
use crate::repo::EntityStore;
use crate::sample;

#[derive(Default)]
struct Collections {
    records: HashMap<EntityKind, Vec<Record>>,
    activity: Vec<ActivityEntry>,
    last_stamp: i64,
}

/// In-memory EntityStore used when the remote backend is unavailable, and in tests.
///
/// Ids are the kind's prefix followed by a millisecond timestamp (`c1718000000000`),
/// bumped when two records are added within the same millisecond. Kinds with a
/// [`local_key`](EntityKind::local_key) are mirrored to local storage after every
/// mutation once [`with_local_mirror`](MemoryStore::with_local_mirror) is set.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Collections>>,
    mirror: Option<SharedStorage>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the fixed sample collections.
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut inner = store.lock();
            for kind in EntityKind::ALL {
                inner.records.insert(kind, sample::records(kind));
            }
        }
        store
    }

    /// Mirror persistable collections into `storage`, replacing the in-memory
    /// copy with whatever was saved by a previous instance.
    pub fn with_local_mirror(mut self, storage: SharedStorage) -> Self {
        {
            let mut inner = self.lock();
            for kind in EntityKind::ALL {
                let Some(key) = kind.local_key() else {
                    continue;
                };
                let Some(saved) = storage.get(key) else {
                    continue;
                };
                match serde_json::from_str::<Vec<Record>>(&saved) {
                    Ok(records) => {
                        inner.records.insert(kind, records);
                    }
                    Err(e) => tracing::warn!("Ignoring corrupt {} in local storage: {}", key, e),
                }
            }
        }
        self.mirror = Some(storage);
        self
    }

    /// Activity entries recorded so far, oldest first.
    pub fn activity(&self) -> Vec<ActivityEntry> {
        self.lock().activity.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, kind: EntityKind, records: &[Record]) {
        let (Some(storage), Some(key)) = (&self.mirror, kind.local_key()) else {
            return;
        };
        let result = serde_json::to_string(records)
            .map_err(StoreError::from)
            .and_then(|json| storage.set(key, &json));
        if let Err(e) = result {
            tracing::warn!("Failed to mirror {} to local storage: {}", kind, e);
        }
    }
}

impl Collections {
    fn next_id(&mut self, kind: EntityKind) -> String {
        let stamp = Utc::now().timestamp_millis().max(self.last_stamp + 1);
        self.last_stamp = stamp;
        format!("{}{}", kind.id_prefix(), stamp)
    }
}

impl EntityStore for MemoryStore {
    async fn fetch_all(&self, kind: EntityKind, filter: Option<&Filter>) -> Vec<Record> {
        let inner = self.lock();
        let Some(records) = inner.records.get(&kind) else {
            return Vec::new();
        };
        records
            .iter()
            .filter(|r| filter.map_or(true, |f| r.matches(f)))
            .cloned()
            .collect()
    }

    async fn add(&self, kind: EntityKind, mut fields: Record) -> StoreResult<Record> {
        let mut inner = self.lock();
        let id = inner.next_id(kind);
        fields.insert(ID_FIELD, id);
        if !fields.contains(CREATED_AT_FIELD) {
            fields.insert(CREATED_AT_FIELD, Utc::now().to_rfc3339());
        }

        let records = inner.records.entry(kind).or_default();
        match kind.placement() {
            Placement::Front => records.insert(0, fields.clone()),
            Placement::Back => records.push(fields.clone()),
        }
        self.persist(kind, records);
        Ok(fields)
    }

    async fn update(&self, kind: EntityKind, id: &str, mut patch: Record) -> StoreResult<Option<Record>> {
        // The id identifies the record; it is not patchable.
        patch.remove(ID_FIELD);

        let mut inner = self.lock();
        let Some(records) = inner.records.get_mut(&kind) else {
            return Ok(None);
        };
        let Some(record) = records.iter_mut().find(|r| r.id() == Some(id)) else {
            return Ok(None);
        };
        record.merge(&patch);
        let merged = record.clone();
        self.persist(kind, records);
        Ok(Some(merged))
    }

    async fn delete(&self, kind: EntityKind, id: &str) -> StoreResult<()> {
        let mut inner = self.lock();
        let Some(records) = inner.records.get_mut(&kind) else {
            return Ok(());
        };
        let before = records.len();
        records.retain(|r| r.id() != Some(id));
        if records.len() != before {
            self.persist(kind, records);
        }
        Ok(())
    }

    async fn log_activity(&self, description: &str, user_name: &str) {
        self.lock().activity.push(ActivityEntry {
            description: description.to_string(),
            user_name: user_name.to_string(),
            created_at: Some(Utc::now().to_rfc3339()),
        });
    }
}
