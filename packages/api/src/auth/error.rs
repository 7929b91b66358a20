use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use store::StoreError;
use thiserror::Error;

use super::validation::ValidationError;

/// Form controls a message can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Field {
    #[serde(rename = "loginEmail")]
    LoginEmail,
    #[serde(rename = "loginPassword")]
    LoginPassword,
    #[serde(rename = "regName")]
    RegName,
    #[serde(rename = "regEmail")]
    RegEmail,
    #[serde(rename = "regMobile")]
    RegMobile,
    #[serde(rename = "regPassword")]
    RegPassword,
    #[serde(rename = "regConfirm")]
    RegConfirm,
}

impl Field {
    /// Identifier of the control in the auth page.
    pub fn id(self) -> &'static str {
        match self {
            Field::LoginEmail => "loginEmail",
            Field::LoginPassword => "loginPassword",
            Field::RegName => "regName",
            Field::RegEmail => "regEmail",
            Field::RegMobile => "regMobile",
            Field::RegPassword => "regPassword",
            Field::RegConfirm => "regConfirm",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Every failing field of one submission, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `result` against `field` if it is an error.
    pub fn check(&mut self, field: Field, result: Result<(), ValidationError>) {
        if let Err(e) = result {
            self.0.insert(field, e);
        }
    }

    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }

    /// `Err(Invalid)` when anything was recorded.
    pub fn into_result(self) -> Result<(), AuthError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AuthError::Invalid(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, error)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, error)?;
        }
        Ok(())
    }
}

/// Why registration or login did not go through.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    Invalid(FieldErrors),
    #[error("An account with this email already exists.")]
    DuplicateEmail,
    #[error("No account found with this email.")]
    NoAccount,
    #[error("Incorrect password.")]
    IncorrectPassword,
    #[error("{0}")]
    Hash(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl AuthError {
    /// The control this error is shown under, when it belongs to one.
    pub fn field(&self) -> Option<Field> {
        match self {
            AuthError::Invalid(errors) => errors.iter().next().map(|(f, _)| f),
            AuthError::DuplicateEmail => Some(Field::RegEmail),
            AuthError::NoAccount => Some(Field::LoginEmail),
            AuthError::IncorrectPassword => Some(Field::LoginPassword),
            AuthError::Hash(_) | AuthError::Storage(_) => None,
        }
    }
}
