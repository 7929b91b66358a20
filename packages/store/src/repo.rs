//! # Repository — typed entity operations over an abstract store
//!
//! This module is the core of the persistence layer. [`Repository`] presents one
//! stable interface per entity kind, regardless of whether the data comes from the
//! remote backend or the local fallback. All reads and writes go through the
//! [`EntityStore`] trait, so the same logic works against [`crate::MemoryStore`],
//! [`crate::RemoteStore`], or the runtime-selected [`crate::AnyStore`].
//!
//! ## [`EntityStore`] trait
//!
//! | Method | Contract |
//! |--------|----------|
//! | `fetch_all` | Full collection of a kind, optionally filtered. **Never fails**: backends degrade to sample data. |
//! | `add` | Assigns an id, persists, returns the stored record. |
//! | `update` | Shallow-merges a patch into the record with the given id. `Ok(None)` when the id is unknown. |
//! | `delete` | Removes the record. Idempotent. |
//! | `log_activity` | Best-effort audit line; failures are logged, not returned. |
//!
//! Writes surface failures as [`StoreError`](crate::StoreError); reads never do.
//!
//! ## Typed access
//!
//! [`Repository::clients`], [`projects`](Repository::projects),
//! [`tasks`](Repository::tasks), [`invoices`](Repository::invoices),
//! [`services`](Repository::services) and [`team`](Repository::team) each return
//! an [`Entities`] handle that converts between [`Record`]s and the typed models in
//! [`crate::models`]. Records that fail to decode are skipped with a warning
//! rather than failing the whole listing, and writes that would produce such a
//! record are rejected before they reach the store.

use std::marker::PhantomData;

use crate::error::StoreResult;
use crate::models::{
    client_filter, project_filter, Client, Entity, EntityKind, Invoice, Project, Service, Task,
    TeamMember,
};
use crate::record::{Filter, Record, ID_FIELD};

/// Async interface implemented by every backend.
pub trait EntityStore {
    fn fetch_all(
        &self,
        kind: EntityKind,
        filter: Option<&Filter>,
    ) -> impl std::future::Future<Output = Vec<Record>>;
    fn add(
        &self,
        kind: EntityKind,
        fields: Record,
    ) -> impl std::future::Future<Output = StoreResult<Record>>;
    fn update(
        &self,
        kind: EntityKind,
        id: &str,
        patch: Record,
    ) -> impl std::future::Future<Output = StoreResult<Option<Record>>>;
    fn delete(
        &self,
        kind: EntityKind,
        id: &str,
    ) -> impl std::future::Future<Output = StoreResult<()>>;
    fn log_activity(
        &self,
        description: &str,
        user_name: &str,
    ) -> impl std::future::Future<Output = ()>;
}

/// Default author of activity entries.
pub const DEFAULT_ACTIVITY_USER: &str = "Admin";

/// Typed entity access backed by an [`EntityStore`].
pub struct Repository<S: EntityStore> {
    store: S,
}

impl<S: EntityStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clients(&self) -> Entities<'_, S, Client> {
        Entities::new(&self.store)
    }

    pub fn projects(&self) -> Entities<'_, S, Project> {
        Entities::new(&self.store)
    }

    pub fn tasks(&self) -> Entities<'_, S, Task> {
        Entities::new(&self.store)
    }

    pub fn invoices(&self) -> Entities<'_, S, Invoice> {
        Entities::new(&self.store)
    }

    pub fn services(&self) -> Entities<'_, S, Service> {
        Entities::new(&self.store)
    }

    pub fn team(&self) -> Entities<'_, S, TeamMember> {
        Entities::new(&self.store)
    }

    /// Projects belonging to one client.
    pub async fn projects_for_client(&self, client_id: &str) -> Vec<Project> {
        self.projects().fetch_where(&client_filter(client_id)).await
    }

    /// Tasks belonging to one project.
    pub async fn tasks_for_project(&self, project_id: &str) -> Vec<Task> {
        self.tasks().fetch_where(&project_filter(project_id)).await
    }

    /// Set an invoice's status, stamping `paid_date` when one is given.
    pub async fn update_invoice_status(
        &self,
        id: &str,
        status: &str,
        paid_date: Option<&str>,
    ) -> StoreResult<Option<Invoice>> {
        let mut patch = Record::new().with("status", status);
        if let Some(date) = paid_date {
            patch.insert("paid_date", date);
        }
        self.invoices().update(id, patch).await
    }

    pub async fn log_activity(&self, description: &str, user_name: Option<&str>) {
        self.store
            .log_activity(description, user_name.unwrap_or(DEFAULT_ACTIVITY_USER))
            .await
    }
}

/// CRUD handle for a single entity kind.
pub struct Entities<'a, S, E> {
    store: &'a S,
    _entity: PhantomData<E>,
}

impl<'a, S: EntityStore, E: Entity> Entities<'a, S, E> {
    fn new(store: &'a S) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    pub async fn fetch_all(&self) -> Vec<E> {
        self.fetch(None).await
    }

    pub async fn fetch_where(&self, filter: &Filter) -> Vec<E> {
        self.fetch(Some(filter)).await
    }

    async fn fetch(&self, filter: Option<&Filter>) -> Vec<E> {
        self.store
            .fetch_all(E::KIND, filter)
            .await
            .into_iter()
            .filter_map(|record| match record.to_entity() {
                Ok(entity) => Some(entity),
                Err(e) => {
                    tracing::warn!(
                        "Skipping undecodable {} record {:?}: {}",
                        E::KIND,
                        record.id(),
                        e
                    );
                    None
                }
            })
            .collect()
    }

    /// Persist a new entity. Any id already set on `entity` is replaced.
    pub async fn add(&self, entity: &E) -> StoreResult<E> {
        let mut fields = Record::from_entity(entity)?;
        fields.remove(ID_FIELD);
        fields.to_entity::<E>()?;
        self.store.add(E::KIND, fields).await?.to_entity()
    }

    /// Shallow-merge `patch` into the entity with `id`.
    ///
    /// The merged result is decoded before anything is written, so a patch that
    /// would leave the entity unreadable fails without touching the store.
    pub async fn update(&self, id: &str, mut patch: Record) -> StoreResult<Option<E>> {
        patch.remove(ID_FIELD);
        let current = self
            .store
            .fetch_all(E::KIND, Some(&Filter::eq(ID_FIELD, id)))
            .await
            .into_iter()
            .find(|record| record.id() == Some(id));
        if let Some(mut merged) = current {
            merged.merge(&patch);
            merged.to_entity::<E>()?;
        }

        match self.store.update(E::KIND, id, patch).await? {
            Some(record) => Ok(Some(record.to_entity()?)),
            None => Ok(None),
        }
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.store.delete(E::KIND, id).await
    }
}
