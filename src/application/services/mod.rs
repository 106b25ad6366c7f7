/// Current notification and its dismiss timer.
pub mod notification_manager;
/// Cancellable delayed events.
pub mod scheduler;

pub use notification_manager::NotificationManager;
pub use scheduler::{KioskEvent, ScheduledTask, Scheduler};
