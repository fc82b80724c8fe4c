//! Custom operations on the user store.

use crate::model::User;

/// Operations addressed to a single user.
#[derive(Debug, Clone)]
pub enum UserAction {
    /// Overwrite the points balance. Negative values are rejected and leave
    /// the stored balance unchanged.
    SetPoints(i64),
}

/// Results of [`UserAction`]s.
#[derive(Debug, Clone)]
pub enum UserActionResult {
    /// The balance after a `SetPoints`.
    Points(i64),
}

/// Operations addressed to the whole user store.
#[derive(Debug, Clone)]
pub enum UserStoreAction {
    /// Case-sensitive lookup by the unique email column.
    FindByEmail(String),
}

/// Results of [`UserStoreAction`]s.
#[derive(Debug, Clone)]
pub enum UserStoreResult {
    Found(Option<User>),
}
