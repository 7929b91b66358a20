//! # Registered account records
//!
//! Two representations of a Nexlance user:
//!
//! ## [`StoredUser`]
//!
//! One entry of the `nexlance_users` collection in local storage, serialized
//! camelCase: `name`, `email`, `mobile`, `passwordHash` (Argon2 PHC string) and
//! `createdAt` (RFC 3339). Emails are kept as typed; lookups compare them
//! case-insensitively through [`StoredUser::has_email`].
//!
//! ## [`UserInfo`]
//!
//! The hash-free projection returned to callers after registration or login.
//! [`SessionUser`](crate::auth::SessionUser) is the even smaller `{name, email}`
//! pair written to the session.

use serde::{Deserialize, Serialize};

/// A registered account as persisted in local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password_hash: String,
    pub created_at: String,
}

impl StoredUser {
    /// Case-insensitive email comparison.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }

    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            name: self.name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

/// Account details safe to hand to a UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jane() -> StoredUser {
        StoredUser {
            name: "Jane Doe".into(),
            email: "Jane@X.com".into(),
            mobile: "9812345678".into(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".into(),
            created_at: "2025-08-15T10:00:00+00:00".into(),
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(jane()).unwrap();
        assert_eq!(value["passwordHash"], json!(jane().password_hash));
        assert_eq!(value["createdAt"], json!("2025-08-15T10:00:00+00:00"));
        assert!(value.get("password").is_none());
    }

    #[test]
    fn test_email_match_ignores_case() {
        assert!(jane().has_email("jane@x.com"));
        assert!(jane().has_email("JANE@X.COM"));
        assert!(!jane().has_email("john@x.com"));
    }

    #[test]
    fn test_info_drops_hash() {
        let info = jane().to_info();
        let value = serde_json::to_value(&info).unwrap();
        assert!(value.get("passwordHash").is_none());
        assert_eq!(info.name, "Jane Doe");
    }
}
