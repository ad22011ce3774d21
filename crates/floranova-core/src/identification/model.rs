//! Records exchanged with the identification collaborators.

use serde::{Deserialize, Serialize};

use crate::user::ScanMode;

/// Image payload produced by the media-capture collaborator.
///
/// Never parsed or validated by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl CapturedImage {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self::new(bytes, "image/jpeg")
    }
}

/// Overall health verdict of a diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosedHealth {
    #[serde(rename = "Sana")]
    Healthy,
    #[serde(rename = "Enferma")]
    Sick,
    #[serde(rename = "Requiere Atención")]
    NeedsAttention,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PestReport {
    pub detected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub remedies: Vec<String>,
}

/// Identification / diagnosis result returned by the diagnosis service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationReport {
    pub common_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "healthStatus")]
    pub health: DiagnosedHealth,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pests: Option<PestReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_needs: Option<String>,
    pub mode: ScanMode,
}

impl IdentificationReport {
    pub fn pests_detected(&self) -> bool {
        self.pests.as_ref().is_some_and(|p| p.detected)
    }
}
