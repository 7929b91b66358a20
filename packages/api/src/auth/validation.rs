//! # Credential validation rules
//!
//! Pure field checks shared by form submission and live (blur/input) feedback.
//! Each validator returns `Ok(())` or the first [`ValidationError`] that applies;
//! its `Display` text is the message shown next to the field.
//!
//! | Validator | Input | Rules, in order |
//! |-----------|-------|-----------------|
//! | [`validate_name`] | trimmed | required, ≥ 2 chars, ASCII letters and spaces only |
//! | [`validate_email`] | trimmed | required, `local@domain.tld` shape |
//! | [`validate_mobile`] | trimmed | required, 10 digits starting with 6–9 |
//! | [`validate_password`] | as typed | required, ≥ 8 chars, upper, lower, digit, symbol |
//! | [`validate_confirm`] | as typed | required, equal to the password |

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Characters accepted as the password's special character.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:'\",.<>?/`~\\";

/// Minimum password length, in UTF-16 code units as browsers count it.
pub const MIN_PASSWORD_LEN: usize = 8;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z ]+$").expect("valid name pattern"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("valid mobile pattern"));

/// A failed field rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Full name is required.")]
    NameRequired,
    #[error("Name must be at least 2 characters.")]
    NameTooShort,
    #[error("Name can only contain letters and spaces.")]
    NameInvalidChars,

    #[error("Email is required.")]
    EmailRequired,
    #[error("Enter a valid email address.")]
    EmailInvalid,

    #[error("Mobile number is required.")]
    MobileRequired,
    #[error("Enter a valid 10-digit mobile number (starts with 6–9).")]
    MobileInvalid,

    #[error("Password is required.")]
    PasswordRequired,
    #[error("Password must be at least 8 characters.")]
    PasswordTooShort,
    #[error("Password must contain at least one uppercase letter (A–Z).")]
    PasswordMissingUppercase,
    #[error("Password must contain at least one lowercase letter (a–z).")]
    PasswordMissingLowercase,
    #[error("Password must contain at least one number (0–9).")]
    PasswordMissingDigit,
    #[error("Password must contain at least one special character (e.g. @, #, $, !).")]
    PasswordMissingSymbol,

    #[error("Please confirm your password.")]
    ConfirmRequired,
    #[error("Passwords do not match.")]
    ConfirmMismatch,
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if name.encode_utf16().count() < 2 {
        return Err(ValidationError::NameTooShort);
    }
    if !NAME_RE.is_match(name) {
        return Err(ValidationError::NameInvalidChars);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(())
}

pub fn validate_mobile(mobile: &str) -> Result<(), ValidationError> {
    let mobile = mobile.trim();
    if mobile.is_empty() {
        return Err(ValidationError::MobileRequired);
    }
    if !MOBILE_RE.is_match(mobile) {
        return Err(ValidationError::MobileInvalid);
    }
    Ok(())
}

/// Check password strength. Only the first failing rule is reported.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PasswordMissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(ValidationError::PasswordMissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordMissingDigit);
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        return Err(ValidationError::PasswordMissingSymbol);
    }
    Ok(())
}

pub fn validate_confirm(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if confirm.is_empty() {
        return Err(ValidationError::ConfirmRequired);
    }
    if password != confirm {
        return Err(ValidationError::ConfirmMismatch);
    }
    Ok(())
}

/// Strip everything but digits, as the mobile field does while typing.
pub fn sanitize_mobile(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules() {
        assert_eq!(validate_name("   "), Err(ValidationError::NameRequired));
        assert_eq!(validate_name(" J "), Err(ValidationError::NameTooShort));
        assert_eq!(validate_name("Jane D0e"), Err(ValidationError::NameInvalidChars));
        assert_eq!(validate_name("Jane-Doe"), Err(ValidationError::NameInvalidChars));
        assert_eq!(validate_name("  Jane Doe  "), Ok(()));
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate_email("a@b.com"), Ok(()));
        assert_eq!(validate_email(" jane@x.com "), Ok(()));
        assert_eq!(validate_email("abc"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email("a@b"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email("a b@c.com"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email(""), Err(ValidationError::EmailRequired));
        assert_eq!(
            validate_email("").unwrap_err().to_string(),
            "Email is required."
        );
    }

    #[test]
    fn test_mobile_rules() {
        assert_eq!(validate_mobile("9876543210"), Ok(()));
        assert_eq!(validate_mobile("1234567890"), Err(ValidationError::MobileInvalid));
        assert_eq!(validate_mobile("98765"), Err(ValidationError::MobileInvalid));
        assert_eq!(validate_mobile("98765432100"), Err(ValidationError::MobileInvalid));
        assert_eq!(validate_mobile(""), Err(ValidationError::MobileRequired));
    }

    #[test]
    fn test_short_passwords_fail_on_length() {
        for pw in ["a", "Ab1!", "Abcd12!", "1234567", "       "] {
            assert_eq!(
                validate_password(pw),
                Err(ValidationError::PasswordTooShort),
                "{pw:?}"
            );
        }
        assert_eq!(validate_password(""), Err(ValidationError::PasswordRequired));
    }

    #[test]
    fn test_password_rules_report_first_failure() {
        assert_eq!(
            validate_password("abcdefgh"),
            Err(ValidationError::PasswordMissingUppercase)
        );
        assert_eq!(
            validate_password("ABCDEFGH"),
            Err(ValidationError::PasswordMissingLowercase)
        );
        assert_eq!(
            validate_password("Abcdefgh"),
            Err(ValidationError::PasswordMissingDigit)
        );
        assert_eq!(
            validate_password("Abcdefg1"),
            Err(ValidationError::PasswordMissingSymbol)
        );
        assert_eq!(validate_password("Abcd1234!"), Ok(()));
        assert_eq!(validate_password("Abcd1234\\"), Ok(()));
        assert_eq!(validate_password("Abcd 1234"), Err(ValidationError::PasswordMissingSymbol));
    }

    #[test]
    fn test_lengths_count_utf16_units() {
        assert_eq!(validate_password("Ab1!😀😀"), Ok(()));
        assert_eq!(validate_password("Ab1!😀"), Err(ValidationError::PasswordTooShort));
        assert_eq!(validate_name("😀"), Err(ValidationError::NameInvalidChars));
    }

    #[test]
    fn test_confirm_rules() {
        assert_eq!(validate_confirm("Abcd1234!", ""), Err(ValidationError::ConfirmRequired));
        assert_eq!(
            validate_confirm("Abcd1234!", "Abcd1234?"),
            Err(ValidationError::ConfirmMismatch)
        );
        assert_eq!(validate_confirm("Abcd1234!", "Abcd1234!"), Ok(()));
    }

    #[test]
    fn test_sanitize_mobile() {
        assert_eq!(sanitize_mobile("+91 98123-45678"), "919812345678");
        assert_eq!(sanitize_mobile("abc"), "");
    }
}
