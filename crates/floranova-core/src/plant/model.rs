//! Plant domain model.

use serde::{Deserialize, Serialize};

/// Stable identity key of a plant.
pub type PlantId = u64;

/// Speech line a plant shows after a successful treatment.
pub const RECOVERED_DIALOGUE: &str = "¡Gracias! Me siento mucho mejor. 😊";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Ok,
    Sick,
    Thirsty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterStatus {
    NeedsWater,
    Ok,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PestStatus {
    Alert,
    Ok,
}

/// Display mood, kept in lockstep with `health.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Happy,
    Sad,
    Sick,
}

/// Composite health record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantHealth {
    pub status: HealthStatus,
    pub water: WaterStatus,
    pub pests: PestStatus,
}

impl PlantHealth {
    /// All-`ok` health.
    pub fn healthy() -> Self {
        Self {
            status: HealthStatus::Ok,
            water: WaterStatus::Ok,
            pests: PestStatus::Ok,
        }
    }

    pub fn is_healthy(&self) -> bool {
        *self == Self::healthy()
    }
}

impl Default for PlantHealth {
    fn default() -> Self {
        Self::healthy()
    }
}

/// Advisory entry shown during treatment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareTip {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl CareTip {
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
        }
    }
}

/// A plant owned by the user.
///
/// `is_quarantined` is set explicitly by whichever producer recorded the
/// sickness and cleared only by treatment; it is never recomputed from
/// `health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    pub species: String,
    /// Adoption / identification date (display string)
    pub adopted_on: String,
    /// Opaque image reference
    pub image: String,
    pub health: PlantHealth,
    pub emotion: Emotion,
    pub dialogue: String,
    #[serde(default)]
    pub tips: Vec<CareTip>,
    #[serde(default)]
    pub is_quarantined: bool,
}

impl Plant {
    /// A healthy, happy plant with no tips.
    pub fn new(id: PlantId, name: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            species: species.into(),
            adopted_on: String::new(),
            image: String::new(),
            health: PlantHealth::healthy(),
            emotion: Emotion::Happy,
            dialogue: String::new(),
            tips: Vec::new(),
            is_quarantined: false,
        }
    }

    /// Applies the treatment transition: all-`ok` health, happy mood,
    /// quarantine cleared.
    pub(crate) fn apply_treatment(&mut self) {
        self.health = PlantHealth::healthy();
        self.emotion = Emotion::Happy;
        self.dialogue = RECOVERED_DIALOGUE.to_string();
        self.is_quarantined = false;
    }
}
