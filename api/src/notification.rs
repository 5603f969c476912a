//! Client-side bookkeeping of the notification bell.

use crate::model::notification::NotificationDto;

/// Notification list and unread count shown in the header.
///
/// The count is tracked separately from the list because the backend reports it on
/// its own endpoint and the list may be truncated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationCenter {
    pub notifications: Vec<NotificationDto>,
    pub unread_count: u32,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list, recounting the unread entries.
    pub fn replace_all(&mut self, notifications: Vec<NotificationDto>) {
        self.unread_count = notifications.iter().filter(|n| !n.is_read).count() as u32;
        self.notifications = notifications;
    }

    pub fn set_unread_count(&mut self, count: u32) {
        self.unread_count = count;
    }

    /// Marks one notification as read; returns whether it was unread.
    pub fn mark_read(&mut self, notification_id: i64) -> bool {
        let Some(notification) = self
            .notifications
            .iter_mut()
            .find(|n| n.id == Some(notification_id))
        else {
            return false;
        };

        if notification.is_read {
            return false;
        }

        notification.is_read = true;
        self.unread_count = self.unread_count.saturating_sub(1);
        true
    }

    pub fn mark_all_read(&mut self) {
        for notification in &mut self.notifications {
            notification.is_read = true;
        }
        self.unread_count = 0;
    }

    /// Prepends a newly received notification.
    pub fn add(&mut self, notification: NotificationDto) {
        if !notification.is_read {
            self.unread_count += 1;
        }
        self.notifications.insert(0, notification);
    }

    pub fn remove(&mut self, notification_id: i64) {
        let Some(index) = self
            .notifications
            .iter()
            .position(|n| n.id == Some(notification_id))
        else {
            return;
        };

        let removed = self.notifications.remove(index);
        if !removed.is_read {
            self.unread_count = self.unread_count.saturating_sub(1);
        }
    }

    pub fn has_unread(&self) -> bool {
        self.unread_count > 0
    }

    /// Text of the bell badge; capped at "99+".
    pub fn badge(&self) -> Option<String> {
        match self.unread_count {
            0 => None,
            n if n > 99 => Some("99+".to_string()),
            n => Some(n.to_string()),
        }
    }
}

#[cfg(test)]
mod test;
