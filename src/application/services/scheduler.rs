//! Cancellable delayed events.

use std::time::Duration;

use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::trace;

use crate::domain::NotificationId;

/// Completions delivered back to the event loop when a timer fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KioskEvent {
    /// The dismiss delay of a notification elapsed.
    DismissNotification(NotificationId),
    /// The simulated payment finished.
    PaymentCompleted {
        /// Amount charged.
        total: Decimal,
    },
}

/// Handle to a pending timer. Dropping the handle cancels the timer.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: AbortHandle,
}

impl ScheduledTask {
    /// Cancels the timer. Has no effect once it has fired.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawns timers on the current tokio runtime and reports them as [`KioskEvent`]s.
#[derive(Debug, Clone)]
pub struct Scheduler {
    event_tx: mpsc::UnboundedSender<KioskEvent>,
}

impl Scheduler {
    /// Timers report on `event_tx`.
    #[must_use]
    pub const fn new(event_tx: mpsc::UnboundedSender<KioskEvent>) -> Self {
        Self { event_tx }
    }

    /// Sends `event` after `delay` unless the returned handle is cancelled first.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use = "dropping the handle cancels the timer"]
    pub fn schedule(&self, delay: Duration, event: KioskEvent) -> ScheduledTask {
        let event_tx = self.event_tx.clone();
        trace!(?delay, ?event, "Scheduling timer");
        let join = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = event_tx.send(event);
        });
        ScheduledTask {
            handle: join.abort_handle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = Scheduler::new(tx);
        let start = tokio::time::Instant::now();

        let _task = scheduler.schedule(
            Duration::from_secs(2),
            KioskEvent::DismissNotification(NotificationId(1)),
        );

        let event = rx.recv().await;
        assert_eq!(event, Some(KioskEvent::DismissNotification(NotificationId(1))));
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = Scheduler::new(tx);

        let cancelled = scheduler.schedule(
            Duration::from_secs(1),
            KioskEvent::DismissNotification(NotificationId(1)),
        );
        let _kept = scheduler.schedule(
            Duration::from_secs(3),
            KioskEvent::DismissNotification(NotificationId(2)),
        );
        cancelled.cancel();

        let event = rx.recv().await;
        assert_eq!(event, Some(KioskEvent::DismissNotification(NotificationId(2))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = Scheduler::new(tx);

        drop(scheduler.schedule(
            Duration::from_secs(1),
            KioskEvent::DismissNotification(NotificationId(1)),
        ));
        drop(scheduler);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }
}
