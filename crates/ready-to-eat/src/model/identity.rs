use crate::model::{AdminId, UserId};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The resolved identity behind a session token.
///
/// Exactly one of three kinds; every identity-dependent branch in the code
/// matches this enum exhaustively, so there is no stringly-typed `user_type`
/// check and no silent "else → unauthenticated" fall-through.
///
/// `Guest` carries a synthetic id of the form `guest_<8 hex chars>`. Guests
/// exist only inside their session record and are never written to any
/// persistent store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Identity {
    User(UserId),
    Admin(AdminId),
    Guest(String),
}

impl Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Identity::User(id) => write!(f, "{}", id),
            Identity::Admin(id) => write!(f, "{}", id),
            Identity::Guest(id) => write!(f, "{}", id),
        }
    }
}

/// Mints a fresh synthetic guest id.
pub fn new_guest_id() -> String {
    format!("guest_{:08x}", rand::rng().random::<u32>())
}
