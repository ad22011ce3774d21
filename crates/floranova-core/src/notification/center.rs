//! Notification store with read tracking.

use tracing::debug;

use super::model::{Notification, NotificationId};

/// Owned notification list in arrival order.
///
/// Every operation is a no-op on an empty or already-read list.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_notifications(notifications: impl IntoIterator<Item = Notification>) -> Self {
        Self {
            notifications: notifications.into_iter().collect(),
        }
    }

    /// Appends an externally produced notification.
    pub fn push(&mut self, notification: Notification) {
        debug!(notification_id = notification.id, "Notification received");
        self.notifications.push(notification);
    }

    pub fn list(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn mark_all_read(&mut self) {
        let unread = self.unread_count();
        for notification in &mut self.notifications {
            notification.read = true;
        }
        debug!(marked = unread, "Notifications marked as read");
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}
