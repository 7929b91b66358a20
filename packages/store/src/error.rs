//! Error type shared by every store backend.

use thiserror::Error;

/// Failures surfaced by write operations and local persistence.
///
/// Reads never produce a `StoreError`: [`crate::EntityStore::fetch_all`] degrades to
/// sample data instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid backend url: {0}")]
    InvalidUrl(String),

    #[error("request to backend failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend rejected request ({status}): {message}")]
    Remote { status: u16, message: String },

    #[error("backend returned no rows")]
    EmptyResponse,

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("local storage failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("local storage unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
