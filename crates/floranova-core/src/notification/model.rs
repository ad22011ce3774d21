//! Notification domain model.

use serde::{Deserialize, Serialize};

pub type NotificationId = u64;

/// Symbolic icon tag, resolved to an asset by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationIcon {
    Droplets,
    Alert,
    Trophy,
    Sun,
    Heart,
    #[default]
    Info,
}

/// Opaque identifier of the view a notification points to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenTarget(String);

impl ScreenTarget {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ScreenTarget {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// An alert shown in the notification panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub msg: String,
    /// Display string such as "Hace 2h"
    pub time: String,
    #[serde(default)]
    pub icon: NotificationIcon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen: Option<ScreenTarget>,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    /// Creates an unread notification without a target screen.
    pub fn new(
        id: NotificationId,
        title: impl Into<String>,
        msg: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            msg: msg.into(),
            time: time.into(),
            icon: NotificationIcon::default(),
            screen: None,
            read: false,
        }
    }

    pub fn with_icon(mut self, icon: NotificationIcon) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_screen(mut self, screen: impl Into<ScreenTarget>) -> Self {
        self.screen = Some(screen.into());
        self
    }
}
