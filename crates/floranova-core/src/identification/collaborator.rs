//! Collaborator traits for image capture and plant identification.

use async_trait::async_trait;

use super::model::{CapturedImage, IdentificationReport};
use crate::error::Result;
use crate::user::ScanMode;

/// Source of image payloads (camera, file picker).
#[async_trait]
pub trait MediaCapture: Send + Sync {
    /// Captures one image.
    ///
    /// # Returns
    ///
    /// - `Ok(CapturedImage)`: image captured
    /// - `Err(_)`: capture failed or was cancelled
    async fn capture(&self) -> Result<CapturedImage>;
}

/// Identification / diagnosis service.
#[async_trait]
pub trait PlantIdentifier: Send + Sync {
    /// Produces a report for the given image in the given scan mode.
    async fn identify(
        &self,
        image: &CapturedImage,
        mode: ScanMode,
    ) -> Result<IdentificationReport>;
}
