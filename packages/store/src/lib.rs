//! # Store crate — entity persistence with a local fallback
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`repo`] | [`EntityStore`] strategy trait and the typed [`Repository`] facade |
//! | [`memory`] | [`MemoryStore`], the seeded in-memory fallback |
//! | [`remote`] | [`RemoteStore`], the PostgREST client |
//! | [`backend`] | [`AnyStore`], picked once from a [`BackendConfig`] |
//! | [`local`] | [`LocalStorage`] key/value persistence (memory, files, browser) |
//! | [`models`] | Entity kinds and their typed views |
//! | [`record`] | The untyped [`Record`] every backend exchanges |
//! | [`sample`] | Seed data for the fallback |

pub mod backend;
pub mod config;
pub mod error;
pub mod local;
pub mod memory;
pub mod models;
pub mod record;
pub mod remote;
pub mod repo;
pub mod sample;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_storage::WebStorage;

pub use backend::AnyStore;
pub use config::BackendConfig;
pub use error::{StoreError, StoreResult};
pub use local::{FileStorage, LocalStorage, MemoryStorage, SharedStorage};
pub use memory::MemoryStore;
pub use models::{
    ActivityEntry, Client, Entity, EntityKind, Invoice, Project, Service, Task, TeamMember,
};
pub use record::{Filter, Record};
pub use remote::RemoteStore;
pub use repo::{Entities, EntityStore, Repository};
