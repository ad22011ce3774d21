//! Root configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every field carries
//! a serde default so that partial files load.

use serde::{Deserialize, Serialize};

use crate::user::FREE_SCAN_LIMIT;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FloraConfig {
    /// Number of identification scans a free-tier session may perform.
    #[serde(default = "default_free_scan_limit")]
    pub free_scan_limit: u32,
    /// Display name given to a freshly started session.
    #[serde(default = "default_user_name")]
    pub default_user_name: String,
    /// Streak value a session starts with.
    #[serde(default)]
    pub initial_streak: u32,
    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_free_scan_limit() -> u32 {
    FREE_SCAN_LIMIT
}

fn default_user_name() -> String {
    "Invitado".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for FloraConfig {
    fn default() -> Self {
        Self {
            free_scan_limit: default_free_scan_limit(),
            default_user_name: default_user_name(),
            initial_streak: 0,
            log_level: default_log_level(),
        }
    }
}
