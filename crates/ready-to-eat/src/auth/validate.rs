//! Format-level input validation.
//!
//! These checks run before any store mutation, so a rejection never needs a
//! rollback. Messages are client-facing.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

static MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{10,15}$").unwrap());

/// The symbol set a password must draw at least one character from.
const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Checks the standard `local@domain.tld` shape. Notably `a@b` (no TLD)
/// fails.
pub fn validate_email(email: &str) -> Result<(), String> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err("Invalid email format".to_string())
    }
}

/// Password strength: at least 8 chars, one uppercase, one lowercase, one
/// digit, and one symbol from the fixed punctuation set.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters long".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password must contain at least one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one number".to_string());
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        return Err("Password must contain at least one special character".to_string());
    }
    Ok(())
}

/// Mobile numbers are 10 to 15 digits, nothing else.
pub fn validate_mobile(mobile: &str) -> Result<(), String> {
    if MOBILE_RE.is_match(mobile) {
        Ok(())
    } else {
        Err("Invalid mobile number format".to_string())
    }
}
