use std::time::Duration;

use tracing::debug;

use super::scheduler::{KioskEvent, ScheduledTask, Scheduler};
use crate::domain::{Notification, NotificationId, NotificationLevel};

/// Holds the single visible notification and its dismiss timer.
///
/// Showing a notification replaces the current one and restarts the timer,
/// so at most one dismiss timer is ever pending.
#[derive(Debug)]
pub struct NotificationManager {
    current: Option<Notification>,
    next_id: u64,
    dismiss_after: Duration,
    dismiss_task: Option<ScheduledTask>,
    scheduler: Scheduler,
}

impl NotificationManager {
    /// Creates a manager that clears each notification after `dismiss_after`.
    #[must_use]
    pub const fn new(dismiss_after: Duration, scheduler: Scheduler) -> Self {
        Self {
            current: None,
            next_id: 0,
            dismiss_after,
            dismiss_task: None,
            scheduler,
        }
    }

    /// Shows `text`, replacing the current notification and restarting the dismiss timer.
    pub fn notify(&mut self, level: NotificationLevel, text: impl Into<String>) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        let notification = Notification::new(id, level, text);
        debug!(id = id.0, text = %notification.text, ?level, "Showing notification");

        if let Some(previous) = self.dismiss_task.take() {
            previous.cancel();
        }
        self.dismiss_task = Some(
            self.scheduler
                .schedule(self.dismiss_after, KioskEvent::DismissNotification(id)),
        );
        self.current = Some(notification);
        id
    }

    /// Shows an informational notification.
    pub fn info(&mut self, text: impl Into<String>) -> NotificationId {
        self.notify(NotificationLevel::Info, text)
    }

    /// Shows an urgent notification.
    pub fn processing(&mut self, text: impl Into<String>) -> NotificationId {
        self.notify(NotificationLevel::Processing, text)
    }

    /// Clears the notification if `id` is still the one on screen.
    ///
    /// Returns `false` for stale ids whose notification was already replaced.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            debug!(id = id.0, "Dismissing notification");
            self.current = None;
            self.dismiss_task = None;
            true
        } else {
            false
        }
    }

    /// Cancels the pending dismiss timer and hides the notification.
    pub fn clear(&mut self) {
        self.dismiss_task = None;
        self.current = None;
    }

    /// The notification on screen, if any.
    #[must_use]
    pub fn current_notification(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Whether a notification is showing.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
