//! Custom operations on the admin store.

use crate::model::Admin;

/// Operations addressed to the whole admin store.
#[derive(Debug, Clone)]
pub enum AdminStoreAction {
    /// Lookup by the unique username column.
    FindByUsername(String),
}

/// Results of [`AdminStoreAction`]s.
#[derive(Debug, Clone)]
pub enum AdminStoreResult {
    Found(Option<Admin>),
}
