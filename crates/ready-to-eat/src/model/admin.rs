use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdminId(pub u32);

impl Display for AdminId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "admin_{}", self.0)
    }
}

/// A back-office operator account. Created at bootstrap and static
/// thereafter; only its session activity changes at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    pub id: AdminId,
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating an admin (seed path only).
#[derive(Debug, Clone)]
pub struct AdminCreate {
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: String,
}

/// Client-facing view of an admin, without the password hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminProfile {
    pub id: AdminId,
    pub username: String,
    pub full_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Admin> for AdminProfile {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            username: admin.username.clone(),
            full_name: admin.full_name.clone(),
            role: admin.role.clone(),
            created_at: admin.created_at,
            updated_at: admin.updated_at,
        }
    }
}
