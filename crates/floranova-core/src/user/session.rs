//! Session-scoped subscription and scan quota state.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::model::{Plan, ScanMode, UserProfile};
use crate::config::FloraConfig;
use crate::error::{FloraError, Result};

/// Free-tier identification quota.
pub const FREE_SCAN_LIMIT: u32 = 3;

/// Outcome of [`UserSessionState::request_scan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScanDecision {
    /// The scan may proceed. `remaining` is `None` for unmetered (PRO) sessions.
    Allowed { remaining: Option<u32> },
    /// The free quota is used up; the caller should offer the upgrade flow.
    QuotaExceeded { limit: u32 },
}

impl ScanDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }
}

/// Subscription tier, quota consumption and profile of the current session.
///
/// `scans_used` only ever increases. PRO sessions are unmetered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSessionState {
    is_pro: bool,
    plan: Option<Plan>,
    scans_used: u32,
    scan_limit: u32,
    streak: u32,
    profile: UserProfile,
}

impl Default for UserSessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl UserSessionState {
    /// Starts a free-tier session with the built-in quota.
    pub fn new() -> Self {
        Self {
            is_pro: false,
            plan: None,
            scans_used: 0,
            scan_limit: FREE_SCAN_LIMIT,
            streak: 0,
            profile: UserProfile::default(),
        }
    }

    /// Starts a free-tier session using configured defaults.
    pub fn with_config(config: &FloraConfig) -> Self {
        Self {
            scan_limit: config.free_scan_limit,
            streak: config.initial_streak,
            profile: UserProfile::new(config.default_user_name.clone()),
            ..Self::new()
        }
    }

    /// Requests one identification scan.
    ///
    /// Free sessions consume one unit of quota per allowed scan; a denied
    /// scan leaves `scans_used` untouched. PRO sessions never consume quota.
    pub fn request_scan(&mut self) -> ScanDecision {
        if self.is_pro {
            debug!("Unmetered scan for PRO session");
            return ScanDecision::Allowed { remaining: None };
        }

        if self.scans_used < self.scan_limit {
            self.scans_used += 1;
            let remaining = self.scan_limit - self.scans_used;
            debug!(scans_used = self.scans_used, remaining, "Scan allowed");
            ScanDecision::Allowed {
                remaining: Some(remaining),
            }
        } else {
            warn!(
                scans_used = self.scans_used,
                limit = self.scan_limit,
                "Free scan quota exceeded"
            );
            ScanDecision::QuotaExceeded {
                limit: self.scan_limit,
            }
        }
    }

    /// Activates PRO. Only the first call has an effect.
    pub fn upgrade(&mut self, plan: Plan) {
        if self.is_pro {
            debug!(?plan, "Session already PRO, upgrade ignored");
            return;
        }
        self.is_pro = true;
        self.plan = Some(plan);
        info!(?plan, "Session upgraded to PRO");
    }

    /// Replaces the profile wholesale.
    pub fn update_profile(&mut self, profile: UserProfile) -> Result<()> {
        if profile.name.trim().is_empty() {
            return Err(FloraError::validation("profile name must not be empty"));
        }
        debug!(name = %profile.name, "Profile updated");
        self.profile = profile;
        Ok(())
    }

    /// Whether the session may use the given scan mode.
    pub fn can_use(&self, mode: ScanMode) -> bool {
        self.is_pro || !mode.requires_pro()
    }

    /// Scans left in the free quota, `None` when unmetered.
    pub fn remaining_scans(&self) -> Option<u32> {
        if self.is_pro {
            None
        } else {
            Some(self.scan_limit.saturating_sub(self.scans_used))
        }
    }

    /// External engagement tick.
    pub fn increment_streak(&mut self) {
        self.streak += 1;
    }

    pub fn is_pro(&self) -> bool {
        self.is_pro
    }

    pub fn plan(&self) -> Option<Plan> {
        self.plan
    }

    pub fn scans_used(&self) -> u32 {
        self.scans_used
    }

    pub fn scan_limit(&self) -> u32 {
        self.scan_limit
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }
}
