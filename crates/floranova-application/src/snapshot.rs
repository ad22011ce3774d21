//! Serializable view of a session for the presentation layer.

use floranova_core::Result;
use floranova_core::notification::{Notification, NotificationCenter};
use floranova_core::plant::{Plant, PlantRegistry};
use floranova_core::user::{Plan, UserProfile, UserSessionState};
use serde::Serialize;

/// Point-in-time copy of everything the UI renders from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub is_pro: bool,
    pub plan: Option<Plan>,
    pub scans_used: u32,
    pub remaining_scans: Option<u32>,
    pub streak: u32,
    pub profile: UserProfile,
    pub healthy_plants: Vec<Plant>,
    pub quarantined_plants: Vec<Plant>,
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

impl SessionSnapshot {
    pub fn capture(
        user: &UserSessionState,
        plants: &PlantRegistry,
        notifications: &NotificationCenter,
    ) -> Self {
        Self {
            is_pro: user.is_pro(),
            plan: user.plan(),
            scans_used: user.scans_used(),
            remaining_scans: user.remaining_scans(),
            streak: user.streak(),
            profile: user.profile().clone(),
            healthy_plants: plants.list_healthy().into_iter().cloned().collect(),
            quarantined_plants: plants.list_quarantined().into_iter().cloned().collect(),
            notifications: notifications.list().to_vec(),
            unread_count: notifications.unread_count(),
        }
    }

    /// JSON form handed to the UI bridge.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
