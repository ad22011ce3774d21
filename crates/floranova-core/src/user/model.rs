//! User profile and subscription value types.

use serde::{Deserialize, Serialize};

/// Editable profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Short tagline shown under the name
    #[serde(default)]
    pub slogan: String,
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slogan: String::new(),
        }
    }

    pub fn with_slogan(mut self, slogan: impl Into<String>) -> Self {
        self.slogan = slogan.into();
        self
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new("Invitado")
    }
}

/// PRO subscription billing plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    Monthly,
    Annual,
}

impl std::str::FromStr for Plan {
    type Err = crate::FloraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Self::Monthly),
            "annual" => Ok(Self::Annual),
            other => Err(crate::FloraError::validation(format!(
                "unknown plan '{other}'"
            ))),
        }
    }
}

/// Identification scan modes offered by the camera screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScanMode {
    /// Identify a plant and diagnose its health.
    Health,
    /// Suggest planting spots in a room.
    Room,
    /// Catalog the plants visible in a picture.
    Inventory,
    /// Whole-home video scan with safety checks.
    HomeScan,
}

impl ScanMode {
    /// Whether the mode is reserved for PRO subscribers.
    pub fn requires_pro(self) -> bool {
        matches!(self, Self::Room | Self::HomeScan)
    }
}
