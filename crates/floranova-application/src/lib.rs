//! Application layer for FloraNova.
//!
//! `GardenSession` is the top-level session controller: it owns the three
//! domain stores and drives the identification and treatment workflows
//! through the camera and diagnosis collaborators.

pub mod garden_session;
pub mod snapshot;

pub use garden_session::{GardenSession, IdentifyOutcome};
pub use snapshot::SessionSnapshot;
