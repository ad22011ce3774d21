//! Session controller.

use std::sync::Arc;

use floranova_core::config::FloraConfig;
use floranova_core::identification::{
    DiagnosedHealth, IdentificationReport, MediaCapture, PlantIdentifier,
};
use floranova_core::notification::{Notification, NotificationCenter};
use floranova_core::plant::{
    CareTip, Emotion, HealthStatus, PestStatus, Plant, PlantHealth, PlantId, PlantRegistry,
    WaterStatus,
};
use floranova_core::user::{Plan, ScanDecision, ScanMode, UserProfile, UserSessionState};
use floranova_core::{FloraError, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::snapshot::SessionSnapshot;

/// Result of an identification attempt.
///
/// Denials are expected outcomes the presentation layer turns into the
/// upgrade flow; collaborator failures come back as `Err` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IdentifyOutcome {
    Identified(IdentificationReport),
    QuotaExceeded { limit: u32 },
    FeatureLocked { mode: ScanMode },
}

/// Owns the session's stores and its collaborators.
///
/// Every operation completes before the next one starts; the controller is
/// driven by a single presentation layer and is not shared between sessions.
pub struct GardenSession {
    user: UserSessionState,
    plants: PlantRegistry,
    notifications: NotificationCenter,
    capture: Arc<dyn MediaCapture>,
    identifier: Arc<dyn PlantIdentifier>,
}

impl GardenSession {
    /// Starts a session with empty stores and configured defaults.
    pub fn new(
        config: &FloraConfig,
        capture: Arc<dyn MediaCapture>,
        identifier: Arc<dyn PlantIdentifier>,
    ) -> Self {
        Self {
            user: UserSessionState::with_config(config),
            plants: PlantRegistry::new(),
            notifications: NotificationCenter::new(),
            capture,
            identifier,
        }
    }

    /// Seeds the session with existing plants and notifications.
    pub fn with_stores(
        mut self,
        plants: PlantRegistry,
        notifications: NotificationCenter,
    ) -> Self {
        self.plants = plants;
        self.notifications = notifications;
        self
    }

    // ========================================================================
    // Identification workflow
    // ========================================================================

    /// Runs one identification scan.
    ///
    /// Locked modes and exhausted quotas return before the camera is touched.
    /// Quota is consumed as soon as the scan is allowed, so a failing
    /// diagnosis still counts.
    pub async fn identify(&mut self, mode: ScanMode) -> Result<IdentifyOutcome> {
        if !self.user.can_use(mode) {
            warn!(?mode, "Scan mode requires PRO");
            return Ok(IdentifyOutcome::FeatureLocked { mode });
        }

        if let ScanDecision::QuotaExceeded { limit } = self.user.request_scan() {
            return Ok(IdentifyOutcome::QuotaExceeded { limit });
        }

        let image = self.capture.capture().await?;
        let report = self.identifier.identify(&image, mode).await?;
        info!(?mode, common_name = %report.common_name, "Plant identified");
        Ok(IdentifyOutcome::Identified(report))
    }

    /// Saves an identification as a new plant and returns it.
    ///
    /// Sick plants enter quarantine; plants needing attention are marked
    /// thirsty but stay in the garden. Fails if no plant id is left.
    pub fn save_identification(
        &mut self,
        report: &IdentificationReport,
        image: impl Into<String>,
    ) -> Result<Plant> {
        let id = self.plants.next_id()?;
        let plant = plant_from_report(id, report, image.into());
        info!(
            plant_id = id,
            quarantined = plant.is_quarantined,
            "Identification saved"
        );
        self.plants.upsert(plant.clone());
        Ok(plant)
    }

    /// Treats a plant once a progress photo has been captured.
    ///
    /// The photo is only the trigger; its content is not inspected.
    pub async fn treat_with_photo(&mut self, id: PlantId) -> Result<Plant> {
        if !self.plants.contains(id) {
            warn!(plant_id = id, "Treatment requested for unknown plant");
            return Err(FloraError::not_found("plant", id));
        }

        let photo = self.capture.capture().await?;
        info!(plant_id = id, bytes = photo.bytes.len(), "Progress photo received");
        self.plants.treat(id)
    }

    // ========================================================================
    // Direct store actions
    // ========================================================================

    pub fn upgrade(&mut self, plan: Plan) {
        self.user.upgrade(plan);
    }

    pub fn update_profile(&mut self, profile: UserProfile) -> Result<()> {
        self.user.update_profile(profile)
    }

    pub fn upsert_plant(&mut self, plant: Plant) {
        self.plants.upsert(plant);
    }

    pub fn treat(&mut self, id: PlantId) -> Result<Plant> {
        self.plants.treat(id)
    }

    pub fn push_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn mark_all_notifications_read(&mut self) {
        self.notifications.mark_all_read();
    }

    // ========================================================================
    // Getters
    // ========================================================================

    pub fn user(&self) -> &UserSessionState {
        &self.user
    }

    /// Mutable access for external ticks such as the engagement streak.
    pub fn user_mut(&mut self) -> &mut UserSessionState {
        &mut self.user
    }

    pub fn plants(&self) -> &PlantRegistry {
        &self.plants
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.user, &self.plants, &self.notifications)
    }
}

fn plant_from_report(id: PlantId, report: &IdentificationReport, image: String) -> Plant {
    let pests = if report.pests_detected() {
        PestStatus::Alert
    } else {
        PestStatus::Ok
    };

    let (health, emotion, dialogue, is_quarantined) = match report.health {
        DiagnosedHealth::Healthy => (
            PlantHealth {
                pests,
                ..PlantHealth::healthy()
            },
            Emotion::Happy,
            "¡Me encanta mi nuevo hogar! 🌱",
            false,
        ),
        DiagnosedHealth::NeedsAttention => (
            PlantHealth {
                status: HealthStatus::Thirsty,
                water: WaterStatus::NeedsWater,
                pests,
            },
            Emotion::Sad,
            "Tengo un poco de sed... 💧",
            false,
        ),
        DiagnosedHealth::Sick => (
            PlantHealth {
                status: HealthStatus::Sick,
                water: WaterStatus::Ok,
                pests,
            },
            Emotion::Sick,
            "No me siento bien, ¿me ayudas? 🤒",
            true,
        ),
    };

    let mut tips: Vec<CareTip> = report
        .pests
        .iter()
        .filter(|p| p.detected)
        .flat_map(|p| p.remedies.iter())
        .map(|remedy| CareTip::new("remedy", remedy.clone()))
        .collect();
    if let Some(light) = &report.light_needs {
        tips.push(CareTip::new("light", light.clone()));
    }

    Plant {
        id,
        name: report.common_name.clone(),
        species: report
            .scientific_name
            .clone()
            .unwrap_or_else(|| report.common_name.clone()),
        adopted_on: chrono::Local::now().format("%Y-%m-%d").to_string(),
        image,
        health,
        emotion,
        dialogue: dialogue.to_string(),
        tips,
        is_quarantined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floranova_core::identification::PestReport;

    fn report(health: DiagnosedHealth) -> IdentificationReport {
        IdentificationReport {
            common_name: "Ficus".to_string(),
            scientific_name: Some("Ficus elastica".to_string()),
            description: String::new(),
            health,
            pests: None,
            soil_analysis: None,
            light_needs: None,
            mode: ScanMode::Health,
        }
    }

    #[test]
    fn test_sick_report_enters_quarantine() {
        let mut sick = report(DiagnosedHealth::Sick);
        sick.pests = Some(PestReport {
            detected: true,
            name: Some("Araña roja".to_string()),
            remedies: vec!["Aceite de neem".to_string(), "Aumenta la humedad".to_string()],
        });

        let plant = plant_from_report(4, &sick, "img://ficus".to_string());
        assert!(plant.is_quarantined);
        assert_eq!(plant.health.status, HealthStatus::Sick);
        assert_eq!(plant.health.pests, PestStatus::Alert);
        assert_eq!(plant.emotion, Emotion::Sick);
        assert_eq!(plant.tips.len(), 2);
        assert!(plant.tips.iter().all(|t| t.kind == "remedy"));
        assert_eq!(plant.species, "Ficus elastica");
    }

    #[test]
    fn test_attention_report_is_thirsty_not_quarantined() {
        let mut attention = report(DiagnosedHealth::NeedsAttention);
        attention.light_needs = Some("Luz indirecta".to_string());

        let plant = plant_from_report(1, &attention, String::new());
        assert!(!plant.is_quarantined);
        assert_eq!(plant.health.status, HealthStatus::Thirsty);
        assert_eq!(plant.health.water, WaterStatus::NeedsWater);
        assert_eq!(plant.emotion, Emotion::Sad);
        assert_eq!(plant.tips, vec![CareTip::new("light", "Luz indirecta")]);
    }

    #[test]
    fn test_remedies_ignored_without_detected_pests() {
        let mut healthy = report(DiagnosedHealth::Healthy);
        healthy.pests = Some(PestReport {
            detected: false,
            name: None,
            remedies: vec!["Aceite de neem".to_string()],
        });

        let plant = plant_from_report(3, &healthy, String::new());
        assert_eq!(plant.health.pests, PestStatus::Ok);
        assert!(plant.tips.is_empty());
    }

    #[test]
    fn test_healthy_report() {
        let mut healthy = report(DiagnosedHealth::Healthy);
        healthy.scientific_name = None;

        let plant = plant_from_report(2, &healthy, String::new());
        assert!(plant.health.is_healthy());
        assert_eq!(plant.emotion, Emotion::Happy);
        assert_eq!(plant.species, "Ficus");
    }
}
