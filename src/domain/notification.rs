//! Transient status notifications.

/// Identifies one shown notification so stale dismissals can be recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

/// Visual variant of the status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationLevel {
    /// Regular feedback such as "item added".
    #[default]
    Info,
    /// Payment in flight.
    Processing,
}

/// A transient status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Identifies the notification to its dismiss timer.
    pub id: NotificationId,
    /// Decides the banner colour.
    pub level: NotificationLevel,
    /// Message shown in the banner.
    pub text: String,
}

impl Notification {
    /// Creates a notification with the given id.
    #[must_use]
    pub fn new(id: NotificationId, level: NotificationLevel, text: impl Into<String>) -> Self {
        Self {
            id,
            level,
            text: text.into(),
        }
    }

    /// Whether the banner should use the urgent (processing) styling.
    #[must_use]
    pub const fn is_urgent(&self) -> bool {
        matches!(self.level, NotificationLevel::Processing)
    }
}
