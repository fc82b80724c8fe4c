//! Environment-driven configuration.
//!
//! Everything has a development default so `cargo run` works out of the box;
//! deployments override via the environment (the binary loads `.env` first).

use std::env;

/// Runtime configuration for the system and its seed data.
#[derive(Debug, Clone)]
pub struct Config {
    /// Capacity of each actor's request channel.
    pub channel_buffer: usize,
    /// Credentials for the seeded back-office account.
    pub admin_username: String,
    pub admin_password: String,
    pub admin_full_name: String,
    /// The seeded account guest orders are attributed to.
    pub fallback_user_email: String,
    pub fallback_user_password: String,
}

impl Config {
    /// Reads configuration from the environment, falling back to
    /// development defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            channel_buffer: env::var("RTE_CHANNEL_BUFFER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.channel_buffer),
            admin_username: env::var("RTE_ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password: env::var("RTE_ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            admin_full_name: env::var("RTE_ADMIN_FULL_NAME").unwrap_or(defaults.admin_full_name),
            fallback_user_email: env::var("RTE_FALLBACK_EMAIL")
                .unwrap_or(defaults.fallback_user_email),
            fallback_user_password: env::var("RTE_FALLBACK_PASSWORD")
                .unwrap_or(defaults.fallback_user_password),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            admin_username: "admin".to_string(),
            admin_password: "Admin123!".to_string(),
            admin_full_name: "Administrator".to_string(),
            fallback_user_email: "walkin@readytoeat.example".to_string(),
            fallback_user_password: "Password123!".to_string(),
        }
    }
}
