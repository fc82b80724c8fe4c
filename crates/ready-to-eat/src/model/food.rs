use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for FoodItems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodId(pub u32);

impl Display for FoodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "food_{}", self.0)
    }
}

/// A menu entry. Orders snapshot `name` and `price` at creation time, so
/// later menu edits never rewrite order history.
///
/// Availability is toggled outside this system; here it only filters the
/// public listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodItem {
    pub id: FoodId,
    pub name: String,
    pub price: f64,
    pub image_path: Option<String>,
    pub has_extra_option: bool,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a food item (seed path only). Price must be
/// strictly positive.
#[derive(Debug, Clone)]
pub struct FoodCreate {
    pub name: String,
    pub price: f64,
    pub image_path: Option<String>,
    pub has_extra_option: bool,
    pub is_available: bool,
}
