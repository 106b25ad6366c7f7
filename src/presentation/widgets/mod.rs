mod footer_bar;
mod header_bar;
mod menu_panel;
mod notification_banner;
mod order_panel;
#[cfg(test)]
pub(crate) mod test_utils;

pub use footer_bar::{FocusContext, FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use menu_panel::{MenuPanel, MenuPanelAction, MenuPanelState, MenuPanelStyle};
pub use notification_banner::NotificationBanner;
pub use order_panel::{OrderPanel, OrderPanelAction, OrderPanelState, OrderPanelStyle};
