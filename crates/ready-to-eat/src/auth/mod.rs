//! Credential handling: Argon2id password hashing and the format-level
//! validation rules applied before anything touches a store.

pub mod password;
pub mod validate;
