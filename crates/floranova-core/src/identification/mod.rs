//! Identification collaborators.
//!
//! The camera and the diagnosis service live outside the core. They are
//! consumed through the traits in `collaborator`; their results are opaque
//! records (`model`) that the core only stores or forwards.

mod collaborator;
mod model;

pub use collaborator::{MediaCapture, PlantIdentifier};
pub use model::{CapturedImage, DiagnosedHealth, IdentificationReport, PestReport};
