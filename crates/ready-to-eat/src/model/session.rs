use crate::model::Identity;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// How long a persistent (user/admin login) session is honored.
pub const PERSISTENT_TTL_DAYS: i64 = 15;

/// Opaque session token handed to clients, 32 hex chars.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(pub String);

impl Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mints a fresh random session token.
pub fn new_session_token() -> SessionToken {
    let mut rng = rand::rng();
    SessionToken(format!(
        "{:016x}{:016x}",
        rng.random::<u64>(),
        rng.random::<u64>()
    ))
}

/// Session durability class.
///
/// - `Persistent` — user/admin logins, honored for [`PERSISTENT_TTL_DAYS`].
/// - `Ephemeral` — guest access; no server-side expiry, the record just dies
///   with logout or with the client forgetting the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Durability {
    Persistent,
    Ephemeral,
}

/// A server-side session record: the only place a guest identity exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: SessionToken,
    pub identity: Identity,
    pub durability: Durability,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Whether the session should no longer resolve at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(deadline) if now >= deadline)
    }
}

/// Payload for opening a session. `now` is stamped by the caller so expiry
/// math is a pure function of the payload.
#[derive(Debug, Clone)]
pub struct SessionCreate {
    pub identity: Identity,
    pub durability: Durability,
    pub now: DateTime<Utc>,
}

impl SessionCreate {
    /// Expiry deadline implied by the durability class.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        match self.durability {
            Durability::Persistent => Some(self.now + Duration::days(PERSISTENT_TTL_DAYS)),
            Durability::Ephemeral => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap()
    }

    fn session(durability: Durability) -> Session {
        let create = SessionCreate {
            identity: Identity::User(UserId(1)),
            durability,
            now: t0(),
        };
        Session {
            token: new_session_token(),
            identity: create.identity.clone(),
            durability,
            created_at: t0(),
            expires_at: create.expires_at(),
        }
    }

    #[test]
    fn persistent_sessions_expire_after_fifteen_days() {
        let s = session(Durability::Persistent);
        assert!(!s.is_expired(t0()));
        assert!(!s.is_expired(t0() + Duration::days(15) - Duration::seconds(1)));
        assert!(s.is_expired(t0() + Duration::days(15)));
    }

    #[test]
    fn ephemeral_sessions_never_expire_server_side() {
        let s = session(Durability::Ephemeral);
        assert!(!s.is_expired(t0() + Duration::days(365)));
    }

    #[test]
    fn tokens_are_32_hex_chars() {
        let token = new_session_token();
        assert_eq!(token.0.len(), 32);
        assert!(token.0.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
