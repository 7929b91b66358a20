//! Session handshake stored in local storage.

use serde::{Deserialize, Serialize};
use store::{LocalStorage, StoreResult};

/// Key holding the authenticated flag.
pub const SESSION_AUTH_KEY: &str = "nexlance_auth";
/// Key holding the signed-in user's `{name, email}`.
pub const SESSION_USER_KEY: &str = "nexlance_user";

const AUTHENTICATED: &str = "1";

/// The user recorded in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
}

pub(crate) fn establish<L: LocalStorage>(storage: &L, user: &SessionUser) -> StoreResult<()> {
    storage.set(SESSION_AUTH_KEY, AUTHENTICATED)?;
    storage.set(SESSION_USER_KEY, &serde_json::to_string(user)?)
}

/// The signed-in user, if the flag is set and the profile parses.
pub(crate) fn current<L: LocalStorage>(storage: &L) -> Option<SessionUser> {
    if storage.get(SESSION_AUTH_KEY).as_deref() != Some(AUTHENTICATED) {
        return None;
    }
    let raw = storage.get(SESSION_USER_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("Ignoring unreadable session user: {}", e);
            None
        }
    }
}

pub(crate) fn clear<L: LocalStorage>(storage: &L) -> StoreResult<()> {
    storage.remove(SESSION_AUTH_KEY)?;
    storage.remove(SESSION_USER_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStorage;

    fn jane() -> SessionUser {
        SessionUser {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
        }
    }

    #[test]
    fn test_establish_writes_handshake() {
        let storage = MemoryStorage::new();
        establish(&storage, &jane()).unwrap();
        assert_eq!(storage.get(SESSION_AUTH_KEY).as_deref(), Some("1"));
        assert_eq!(
            storage.get(SESSION_USER_KEY).as_deref(),
            Some(r#"{"name":"Jane Doe","email":"jane@x.com"}"#)
        );
        assert_eq!(current(&storage), Some(jane()));
    }

    #[test]
    fn test_flag_required() {
        let storage = MemoryStorage::new();
        establish(&storage, &jane()).unwrap();
        storage.set(SESSION_AUTH_KEY, "0").unwrap();
        assert_eq!(current(&storage), None);
    }

    #[test]
    fn test_clear() {
        let storage = MemoryStorage::new();
        establish(&storage, &jane()).unwrap();
        clear(&storage).unwrap();
        assert_eq!(current(&storage), None);
        assert_eq!(storage.get(SESSION_USER_KEY), None);
    }
}
