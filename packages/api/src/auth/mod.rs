//! Credential validation and local account management.

mod accounts;
mod error;
mod password;
mod session;
pub mod validation;

pub use accounts::{
    Accounts, LoginForm, LoginOutcome, RegistrationForm, DASHBOARD_PAGE, LOGGED_IN_MESSAGE,
    REGISTERED_MESSAGE, USERS_KEY,
};
pub use error::{AuthError, Field, FieldErrors};
pub use password::{hash_password, verify_password};
pub use session::{SessionUser, SESSION_AUTH_KEY, SESSION_USER_KEY};
pub use validation::{
    sanitize_mobile, validate_confirm, validate_email, validate_mobile, validate_name,
    validate_password, ValidationError,
};
