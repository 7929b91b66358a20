//! # Accounts — registration, login and session
//!
//! [`Accounts`] owns the account collection and the session handshake, both kept
//! in a [`LocalStorage`]:
//!
//! | Key | Value |
//! |-----|-------|
//! | `nexlance_users` | JSON array of [`StoredUser`] |
//! | `nexlance_auth` | `"1"` while signed in |
//! | `nexlance_user` | `{"name", "email"}` of the signed-in user |
//!
//! ## Registration
//!
//! Name, email and mobile are trimmed; the password and its confirmation are
//! taken as typed. Every field is validated and all failures are returned
//! together as [`AuthError::Invalid`]. The confirmation only reports a mismatch
//! when the password itself passed. A case-insensitive duplicate email is
//! rejected with [`AuthError::DuplicateEmail`]; otherwise the password is hashed
//! and the account appended. Entries that do not decode as [`StoredUser`] are
//! skipped when reading but written back untouched, and a collection that is not
//! a JSON array is never overwritten.
//!
//! ## Login
//!
//! The email must validate and the password must be non-empty. An unknown email
//! is [`AuthError::NoAccount`], a known one with the wrong password is
//! [`AuthError::IncorrectPassword`]. On success the session handshake is written
//! and a [`LoginOutcome`] tells the UI where to go.

use chrono::Utc;
use serde_json::Value;
use store::{LocalStorage, StoreError};

use super::error::{AuthError, Field, FieldErrors};
use super::password::{hash_password, verify_password};
use super::session::{self, SessionUser};
use super::validation::{
    validate_confirm, validate_email, validate_mobile, validate_name, validate_password,
    ValidationError,
};
use crate::models::{StoredUser, UserInfo};

/// Key of the account collection.
pub const USERS_KEY: &str = "nexlance_users";
/// Page opened after a successful login.
pub const DASHBOARD_PAGE: &str = "dashboard.html";

pub const REGISTERED_MESSAGE: &str = "Account created successfully! You can now sign in.";
pub const LOGGED_IN_MESSAGE: &str = "Login successful! Redirecting...";

/// Raw registration form input.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub confirm: String,
}

/// Raw login form input.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// A successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub user: UserInfo,
    pub redirect: &'static str,
}

impl LoginOutcome {
    pub fn message(&self) -> &'static str {
        LOGGED_IN_MESSAGE
    }
}

/// Account registry and session over a local key/value store.
pub struct Accounts<L> {
    storage: L,
}

impl<L: LocalStorage> Accounts<L> {
    pub fn new(storage: L) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &L {
        &self.storage
    }

    /// Validate and create an account.
    pub fn register(&self, form: &RegistrationForm) -> Result<UserInfo, AuthError> {
        let name = form.name.trim();
        let email = form.email.trim();
        let mobile = form.mobile.trim();

        let mut errors = FieldErrors::new();
        errors.check(Field::RegName, validate_name(name));
        errors.check(Field::RegEmail, validate_email(email));
        errors.check(Field::RegMobile, validate_mobile(mobile));
        let password_ok = validate_password(&form.password);
        let confirm = validate_confirm(&form.password, &form.confirm);
        match confirm {
            Err(ValidationError::ConfirmMismatch) if password_ok.is_err() => {}
            other => errors.check(Field::RegConfirm, other),
        }
        errors.check(Field::RegPassword, password_ok);
        errors.into_result()?;

        // Undecodable entries are written back unchanged.
        let mut entries = self.stored_entries()?;
        let taken = entries.iter().any(|entry| {
            entry
                .get("email")
                .and_then(Value::as_str)
                .is_some_and(|e| e.to_lowercase() == email.to_lowercase())
        });
        if taken {
            return Err(AuthError::DuplicateEmail);
        }

        let user = StoredUser {
            name: name.to_string(),
            email: email.to_string(),
            mobile: mobile.to_string(),
            password_hash: hash_password(&form.password)?,
            created_at: Utc::now().to_rfc3339(),
        };
        let info = user.to_info();
        entries.push(serde_json::to_value(&user).map_err(StoreError::from)?);
        self.save_entries(&entries)?;

        tracing::info!("Registered account for {}", info.email);
        Ok(info)
    }

    /// Check credentials and open a session.
    pub fn login(&self, form: &LoginForm) -> Result<LoginOutcome, AuthError> {
        let email = form.email.trim();

        let mut errors = FieldErrors::new();
        errors.check(Field::LoginEmail, validate_email(email));
        if form.password.is_empty() {
            errors.insert(Field::LoginPassword, ValidationError::PasswordRequired);
        }
        errors.into_result()?;

        let users = self.users();
        let user = users
            .iter()
            .find(|u| u.has_email(email))
            .ok_or(AuthError::NoAccount)?;
        if !verify_password(&form.password, &user.password_hash)? {
            return Err(AuthError::IncorrectPassword);
        }

        session::establish(
            &self.storage,
            &SessionUser {
                name: user.name.clone(),
                email: user.email.clone(),
            },
        )?;
        Ok(LoginOutcome {
            user: user.to_info(),
            redirect: DASHBOARD_PAGE,
        })
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        session::clear(&self.storage)?;
        Ok(())
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<SessionUser> {
        session::current(&self.storage)
    }

    /// Every registered account that decodes. Malformed entries are skipped;
    /// an unreadable collection reads as empty.
    pub fn users(&self) -> Vec<StoredUser> {
        let entries = match self.stored_entries() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Ignoring unreadable {}: {}", USERS_KEY, e);
                return Vec::new();
            }
        };
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(i, entry)| match serde_json::from_value(entry) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!("Skipping malformed account #{} in {}: {}", i, USERS_KEY, e);
                    None
                }
            })
            .collect()
    }

    /// Raw entries of the collection. Fails when the stored text is not a
    /// JSON array, so it is never overwritten.
    fn stored_entries(&self) -> Result<Vec<Value>, AuthError> {
        let Some(raw) = self.storage.get(USERS_KEY) else {
            return Ok(Vec::new());
        };
        let entries: Vec<Value> = serde_json::from_str(&raw).map_err(StoreError::from)?;
        Ok(entries)
    }

    fn save_entries(&self, entries: &[Value]) -> Result<(), AuthError> {
        let json = serde_json::to_string(entries).map_err(StoreError::from)?;
        self.storage.set(USERS_KEY, &json)?;
        Ok(())
    }
}
