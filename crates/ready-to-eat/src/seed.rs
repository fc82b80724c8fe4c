//! Bootstrap data: the back-office account, the fallback user that guest
//! orders are attributed to, and the menu.

use crate::auth::password::hash_password;
use crate::config::Config;
use crate::lifecycle::AppSystem;
use crate::model::{AdminCreate, AdminId, FoodCreate, FoodId, UserCreate, UserId};
use tracing::info;

/// The menu as shipped: `(name, price, has_extra_option)`. Ids are assigned
/// in this order, starting at 1.
const MENU: &[(&str, f64, bool)] = &[
    ("Samosa", 15.0, false),
    ("Kachori", 15.0, false),
    ("Aloo Parantha", 30.0, false),
    ("Pav Bhaji", 60.0, false),
    ("Chole Bhature", 60.0, false),
    ("Veg Burger", 50.0, false),
    ("Hakka Noodles", 40.0, false),
    ("Manchurian", 60.0, false),
    ("Cup of Tea", 10.0, false),
    ("Cold Coffee", 30.0, false),
    ("Lays Chips", 20.0, false),
    ("Kurkure", 20.0, false),
    ("Coca Cola", 20.0, false),
    ("Frooti", 15.0, false),
];

/// Ids of the records created by [`seed_all`].
#[derive(Debug, Clone)]
pub struct SeedData {
    pub admin_id: AdminId,
    pub fallback_user: UserId,
    pub food_ids: Vec<FoodId>,
}

/// Seeds a fresh system: one admin, the fallback user, and the menu.
/// Meant for an empty store, right after startup.
pub async fn seed_all(system: &AppSystem, config: &Config) -> Result<SeedData, String> {
    let admin_hash = hash_password(&config.admin_password).map_err(|e| e.to_string())?;
    let admin_id = system
        .admins
        .create_admin(AdminCreate {
            username: config.admin_username.clone(),
            password_hash: admin_hash,
            full_name: config.admin_full_name.clone(),
            role: "admin".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?;

    let user_hash = hash_password(&config.fallback_user_password).map_err(|e| e.to_string())?;
    let fallback_user = system
        .users
        .create_user(UserCreate {
            first_name: "Walk-in".to_string(),
            last_name: "Counter".to_string(),
            email: config.fallback_user_email.clone(),
            password_hash: user_hash,
            mobile: "0000000000".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?;

    let mut food_ids = Vec::with_capacity(MENU.len());
    for (name, price, has_extra_option) in MENU {
        let id = system
            .foods
            .create_food(FoodCreate {
                name: (*name).to_string(),
                price: *price,
                image_path: None,
                has_extra_option: *has_extra_option,
                is_available: true,
            })
            .await
            .map_err(|e| e.to_string())?;
        food_ids.push(id);
    }

    info!(
        admin = %admin_id,
        fallback_user = %fallback_user,
        menu_items = food_ids.len(),
        "Seed data loaded"
    );
    Ok(SeedData {
        admin_id,
        fallback_user,
        food_ids,
    })
}
