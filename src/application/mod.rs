//! Application layer: the kiosk state container and its timer services.

/// Timer and notification services.
pub mod services;
/// Kiosk state container.
pub mod shell;

pub use services::{KioskEvent, NotificationManager, ScheduledTask, Scheduler};
pub use shell::{KioskSettings, KioskShell};
