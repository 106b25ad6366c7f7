//! Kiosk state container.

use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::application::services::{KioskEvent, NotificationManager, ScheduledTask, Scheduler};
use crate::domain::money::format_money;
use crate::domain::{Catalog, CheckoutState, MenuItem, Notification, Order, OrderTotals};

/// Fixed parameters read once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KioskSettings {
    /// Fraction of the subtotal charged as tax.
    pub tax_rate: Decimal,
    /// How long a notification stays visible.
    pub notification_dismiss: Duration,
    /// How long the simulated payment takes.
    pub processing_delay: Duration,
}

impl Default for KioskSettings {
    fn default() -> Self {
        Self {
            tax_rate: dec!(0.05),
            notification_dismiss: Duration::from_secs(3),
            processing_delay: Duration::from_secs(2),
        }
    }
}

/// Owns the order, checkout state and notification, and applies every
/// mutation the views request.
///
/// Timer completions arrive on the receiver paired with the sender passed to
/// [`KioskShell::new`] and must be fed back through [`KioskShell::handle_event`].
#[derive(Debug)]
pub struct KioskShell {
    catalog: Catalog,
    order: Order,
    checkout: CheckoutState,
    notifications: NotificationManager,
    scheduler: Scheduler,
    settings: KioskSettings,
    processing_task: Option<ScheduledTask>,
}

impl KioskShell {
    /// Creates an idle shell with an empty order. Timer completions are sent on `event_tx`.
    #[must_use]
    pub fn new(
        catalog: Catalog,
        settings: KioskSettings,
        event_tx: mpsc::UnboundedSender<KioskEvent>,
    ) -> Self {
        let scheduler = Scheduler::new(event_tx);
        Self {
            catalog,
            order: Order::new(),
            checkout: CheckoutState::Idle,
            notifications: NotificationManager::new(
                settings.notification_dismiss,
                scheduler.clone(),
            ),
            scheduler,
            settings,
            processing_task: None,
        }
    }

    /// The menu.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current order.
    #[must_use]
    pub const fn order(&self) -> &Order {
        &self.order
    }

    /// Startup settings.
    #[must_use]
    pub const fn settings(&self) -> &KioskSettings {
        &self.settings
    }

    /// Totals of the current order at the configured tax rate.
    #[must_use]
    pub fn totals(&self) -> OrderTotals {
        self.order.totals(self.settings.tax_rate)
    }

    /// Current checkout state.
    #[must_use]
    pub const fn checkout(&self) -> CheckoutState {
        self.checkout
    }

    /// Whether a payment is in flight.
    #[must_use]
    pub const fn is_processing(&self) -> bool {
        self.checkout.is_processing()
    }

    /// The notification currently on screen, if any.
    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current_notification()
    }

    /// Appends `item` and announces it.
    pub fn add_to_order(&mut self, item: MenuItem) {
        info!(item_id = %item.id(), item = %item.name(), "Added to order");
        self.notifications.info(format!("{} added.", item.name()));
        self.order.push(item);
    }

    /// Removes the line at `position`. Out-of-range positions are ignored.
    pub fn remove_from_order(&mut self, position: usize) -> Option<MenuItem> {
        let removed = self.order.remove(position);
        match &removed {
            Some(item) => info!(position, item = %item.name(), "Removed from order"),
            None => debug!(position, len = self.order.len(), "Ignoring out-of-range removal"),
        }
        removed
    }

    /// Starts the simulated payment for `total`.
    ///
    /// Returns `false` without side effects when the order is empty or a
    /// payment is already in flight.
    pub fn process_order(&mut self, total: Decimal) -> bool {
        if self.order.is_empty() {
            debug!("Ignoring process request for empty order");
            return false;
        }
        if self.checkout.is_processing() {
            debug!("Ignoring process request while payment is in flight");
            return false;
        }

        info!(total = %total, lines = self.order.len(), "Processing payment");
        self.checkout = CheckoutState::Processing { total };
        self.notifications
            .processing(format!("Processing payment of {}...", format_money(total)));
        self.processing_task = Some(self.scheduler.schedule(
            self.settings.processing_delay,
            KioskEvent::PaymentCompleted { total },
        ));
        true
    }

    /// Applies a timer completion.
    pub fn handle_event(&mut self, event: KioskEvent) {
        match event {
            KioskEvent::DismissNotification(id) => {
                if !self.notifications.dismiss(id) {
                    debug!(id = id.0, "Ignoring stale dismissal");
                }
            }
            KioskEvent::PaymentCompleted { total } => {
                if !self.checkout.is_processing() {
                    warn!(total = %total, "Payment completion without a payment in flight");
                    return;
                }
                self.processing_task = None;
                self.checkout = CheckoutState::Idle;
                info!(total = %total, "Order processed");
                self.notifications.info(format!(
                    "Order successfully processed! Total: {}",
                    format_money(total)
                ));
                self.order.clear();
            }
        }
    }

    /// Cancels every pending timer.
    pub fn shutdown(&mut self) {
        if let Some(task) = self.processing_task.take() {
            task.cancel();
        }
        self.notifications.clear();
    }
}
