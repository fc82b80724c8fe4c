//! Argon2id password hashing.
//!
//! Hashes are stored in PHC string format, so the salt and parameters travel
//! with the hash and verification needs no side table.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hashes a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Verifies a plaintext password against a stored PHC hash string.
///
/// A malformed stored hash counts as a failed verification rather than an
/// error: the caller only ever learns "credentials valid or not".
pub fn verify_password(hash: &str, password: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_verifies() {
        let hash = hash_password("Password123!").unwrap();
        assert!(verify_password(&hash, "Password123!"));
        assert!(!verify_password(&hash, "Password123?"));
    }

    #[test]
    fn same_password_hashes_differently() {
        let a = hash_password("Password123!").unwrap();
        let b = hash_password("Password123!").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn garbage_hash_fails_closed() {
        assert!(!verify_password("not-a-phc-string", "Password123!"));
        assert!(!verify_password("", "Password123!"));
    }
}
