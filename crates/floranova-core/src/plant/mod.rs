//! Plant domain module.
//!
//! # Module Structure
//!
//! - `model`: `Plant` and its composite health record
//! - `registry`: `PlantRegistry`, the owned collection with its
//!   healthy / quarantine partition and the treatment transition

mod model;
mod registry;

// Re-export public API
pub use model::{
    CareTip, Emotion, HealthStatus, PestStatus, Plant, PlantHealth, PlantId, RECOVERED_DIALOGUE,
    WaterStatus,
};
pub use registry::PlantRegistry;
