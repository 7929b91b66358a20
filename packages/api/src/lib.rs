//! # API crate — accounts, settings and wiring for the Nexlance platform
//!
//! Sits on top of the `store` crate and holds everything a front end needs
//! besides entity persistence.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Field validation, Argon2 password hashing, registration, login and the session handshake |
//! | [`models`] | Stored account records (`StoredUser`) and their hash-free projection (`UserInfo`) |
//! | [`settings`] | Layered configuration: defaults, `nexlance.toml`, `NEXLANCE_*` environment |
//! | [`format`] | Currency, date and initials helpers for display |
//!
//! ## Wiring
//!
//! [`Platform::from_settings`] is the single construction point: it opens the
//! local storage directory, builds [`Accounts`] over it and picks the entity
//! backend once. When the remote backend is unconfigured or fails to
//! initialise, entities come from the seeded fallback, whose invoices are
//! mirrored into the same local storage.

use std::sync::Arc;

use store::{AnyStore, FileStorage, MemoryStore, Repository, SharedStorage};

pub mod auth;
pub mod format;
pub mod models;
pub mod settings;

pub use auth::{Accounts, AuthError, Field, LoginForm, LoginOutcome, RegistrationForm};
pub use models::{StoredUser, UserInfo};
pub use settings::{Settings, SettingsError};

/// Accounts and entity repository sharing one local storage.
pub struct Platform {
    pub accounts: Accounts<SharedStorage>,
    pub repo: Repository<AnyStore>,
}

impl Platform {
    pub fn from_settings(settings: &Settings) -> Self {
        let storage: SharedStorage = Arc::new(FileStorage::new(&settings.storage.dir));
        Self::with_storage(settings, storage)
    }

    /// Wire against an explicit storage, e.g. the browser's on wasm.
    pub fn with_storage(settings: &Settings, storage: SharedStorage) -> Self {
        let mirror = storage.clone();
        let store = AnyStore::select(&settings.backend, move || {
            MemoryStore::seeded().with_local_mirror(mirror)
        });
        Self {
            accounts: Accounts::new(storage),
            repo: Repository::new(store),
        }
    }

    /// Whether entities go to the remote backend.
    pub fn is_remote(&self) -> bool {
        self.repo.store().is_remote()
    }
}
