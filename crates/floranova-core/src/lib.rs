//! Domain core for FloraNova.
//!
//! Three independent, session-scoped stores:
//!
//! - [`user::UserSessionState`]: subscription tier, scan quota, profile
//! - [`plant::PlantRegistry`]: the user's plants and their quarantine partition
//! - [`notification::NotificationCenter`]: alerts and their read state
//!
//! plus the collaborator interfaces in [`identification`] through which the
//! camera and the diagnosis service are consumed.

pub mod config;
pub mod error;
pub mod identification;
pub mod notification;
pub mod plant;
pub mod user;

// Re-export common error type
pub use error::{FloraError, Result};
