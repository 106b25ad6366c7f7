//! Single-screen kiosk layout.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, Widget},
};
use rust_decimal::Decimal;

use crate::application::KioskShell;
use crate::domain::MenuItem;
use crate::domain::keybinding::{
    Action, Keybind, global_keybindings, menu_keybindings, order_keybindings, resolve,
};
use crate::presentation::events::hit;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    FocusContext, FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, MenuPanel,
    MenuPanelAction, MenuPanelState, MenuPanelStyle, NotificationBanner, OrderPanel,
    OrderPanelAction, OrderPanelState, OrderPanelStyle,
};

const TITLE: &str = "The Kiosk App";
const SUBTITLE: &str = "Place Your Order";

/// What the screen asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenCommand {
    /// Add the highlighted or given item.
    AddItem(MenuItem),
    /// Remove the order line at this position.
    RemoveLine(usize),
    /// Pay for the order.
    ProcessOrder(Decimal),
    /// Leave the application.
    Quit,
}

impl From<MenuPanelAction> for ScreenCommand {
    fn from(action: MenuPanelAction) -> Self {
        match action {
            MenuPanelAction::AddItem(item) => Self::AddItem(item),
        }
    }
}

impl From<OrderPanelAction> for ScreenCommand {
    fn from(action: OrderPanelAction) -> Self {
        match action {
            OrderPanelAction::Remove(position) => Self::RemoveLine(position),
            OrderPanelAction::Process(total) => Self::ProcessOrder(total),
        }
    }
}

/// View-only state: focus, panel selections and the last layout.
#[derive(Debug)]
pub struct KioskScreenState {
    focus: FocusContext,
    menu: MenuPanelState,
    order: OrderPanelState,
    menu_area: Rect,
    order_area: Rect,
    menu_keys: Vec<Keybind>,
    order_keys: Vec<Keybind>,
    global_keys: Vec<Keybind>,
}

impl KioskScreenState {
    /// Creates state with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        let mut state = Self {
            focus: FocusContext::Menu,
            menu: MenuPanelState::new(),
            order: OrderPanelState::new(),
            menu_area: Rect::default(),
            order_area: Rect::default(),
            menu_keys: menu_keybindings(),
            order_keys: order_keybindings(),
            global_keys: global_keybindings(),
        };
        state.set_focus(FocusContext::Menu);
        state
    }

    /// Panel holding focus.
    #[must_use]
    pub const fn focus(&self) -> FocusContext {
        self.focus
    }

    /// Menu panel state.
    #[must_use]
    pub const fn menu(&self) -> &MenuPanelState {
        &self.menu
    }

    /// Moves focus and updates both panels.
    pub const fn set_focus(&mut self, focus: FocusContext) {
        self.focus = focus;
        self.menu.set_focused(matches!(focus, FocusContext::Menu));
        self.order.set_focused(matches!(focus, FocusContext::Order));
    }

    fn focused_keys(&self) -> &[Keybind] {
        match self.focus {
            FocusContext::Menu => &self.menu_keys,
            FocusContext::Order => &self.order_keys,
        }
    }

    /// Maps a key press to a command, updating focus and selection on the way.
    pub fn handle_key(&mut self, key: KeyEvent, shell: &KioskShell) -> Option<ScreenCommand> {
        let action = resolve(self.focused_keys(), &self.global_keys, &key)?;
        match action {
            Action::Quit => Some(ScreenCommand::Quit),
            Action::FocusNext => {
                self.set_focus(self.focus.next());
                None
            }
            Action::ProcessOrder => {
                let totals = shell.totals();
                self.order
                    .handle_action(action, shell.order(), &totals)
                    .map(Into::into)
            }
            _ => match self.focus {
                FocusContext::Menu => self
                    .menu
                    .handle_action(action, shell.catalog())
                    .map(Into::into),
                FocusContext::Order => {
                    let totals = shell.totals();
                    self.order
                        .handle_action(action, shell.order(), &totals)
                        .map(Into::into)
                }
            },
        }
    }

    /// Routes a left click to the panel under the cursor, focusing it.
    pub fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        shell: &KioskShell,
    ) -> Option<ScreenCommand> {
        if hit(self.menu_area, column, row) {
            self.set_focus(FocusContext::Menu);
            return self
                .menu
                .handle_click(column, row, shell.catalog())
                .map(Into::into);
        }
        if hit(self.order_area, column, row) {
            self.set_focus(FocusContext::Order);
            let totals = shell.totals();
            return self
                .order
                .handle_click(column, row, shell.order(), &totals)
                .map(Into::into);
        }
        None
    }
}

impl Default for KioskScreenState {
    fn default() -> Self {
        Self::new()
    }
}

/// The whole kiosk screen.
pub struct KioskScreen<'a> {
    shell: &'a KioskShell,
    theme: &'a Theme,
}

impl<'a> KioskScreen<'a> {
    /// Renders `shell` in `theme` colours.
    #[must_use]
    pub const fn new(shell: &'a KioskShell, theme: &'a Theme) -> Self {
        Self { shell, theme }
    }
}

impl StatefulWidget for KioskScreen<'_> {
    type State = KioskScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [header_area, main_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let [menu_area, order_area] =
            Layout::horizontal([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
                .areas(main_area);
        state.menu_area = menu_area;
        state.order_area = order_area;

        HeaderBar::new(TITLE, SUBTITLE)
            .version(crate::VERSION)
            .style(HeaderBarStyle::from_theme(self.theme))
            .render(header_area, buf);

        MenuPanel::new(self.shell.catalog())
            .style(MenuPanelStyle::from_theme(self.theme))
            .render(menu_area, buf, &mut state.menu);

        OrderPanel::new(
            self.shell.order(),
            self.shell.totals(),
            self.shell.settings().tax_rate,
        )
        .style(OrderPanelStyle::from_theme(self.theme))
        .render(order_area, buf, &mut state.order);

        let status = if self.shell.is_processing() {
            "PROCESSING"
        } else {
            "READY"
        };
        FooterBar::new(state.focused_keys().iter().chain(state.global_keys.iter()))
            .focus_context(state.focus)
            .right_info(Some(status))
            .style(FooterBarStyle::from_theme(self.theme))
            .render(footer_area, buf);

        if let Some(notification) = self.shell.notification() {
            NotificationBanner::new(notification, self.theme)
                .urgent(self.shell.is_processing())
                .render(main_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{KioskEvent, KioskSettings};
    use crate::domain::Catalog;
    use crate::presentation::widgets::test_utils::{buffer_lines, find_text};
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::style::Color;
    use rust_decimal_macros::dec;
    use tokio::sync::mpsc;

    fn shell() -> (KioskShell, mpsc::UnboundedReceiver<KioskEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            KioskShell::new(Catalog::builtin(), KioskSettings::default(), tx),
            rx,
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn render(shell: &KioskShell, state: &mut KioskScreenState) -> Buffer {
        let area = Rect::new(0, 0, 120, 30);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();
        KioskScreen::new(shell, &theme).render(area, &mut buf, state);
        buf
    }

    #[test]
    fn test_tab_switches_focus() {
        let (shell, _rx) = shell();
        let mut state = KioskScreenState::new();

        assert_eq!(state.handle_key(key(KeyCode::Tab), &shell), None);
        assert_eq!(state.focus(), FocusContext::Order);
        assert!(!state.menu().is_focused());
    }

    #[test]
    fn test_enter_in_menu_adds_first_item() {
        let (shell, _rx) = shell();
        let mut state = KioskScreenState::new();

        let command = state.handle_key(key(KeyCode::Enter), &shell);

        assert_eq!(
            command,
            Some(ScreenCommand::AddItem(shell.catalog().items()[0].clone()))
        );
    }

    #[test]
    fn test_process_on_empty_order_is_disabled() {
        let (shell, _rx) = shell();
        let mut state = KioskScreenState::new();

        assert_eq!(state.handle_key(key(KeyCode::Char('p')), &shell), None);
    }

    #[test]
    fn test_quit_keys() {
        let (shell, _rx) = shell();
        let mut state = KioskScreenState::new();

        assert_eq!(
            state.handle_key(key(KeyCode::Char('q')), &shell),
            Some(ScreenCommand::Quit)
        );
        assert_eq!(
            state.handle_key(key(KeyCode::Esc), &shell),
            Some(ScreenCommand::Quit)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_screen_render() {
        let (mut shell, _rx) = shell();
        let samosa = shell.catalog().items()[0].clone();
        let cola = shell.catalog().items()[5].clone();
        shell.add_to_order(samosa);
        shell.add_to_order(cola);
        let mut state = KioskScreenState::new();

        let buf = render(&shell, &mut state);
        let text = buffer_lines(&buf).join("\n");

        assert!(text.contains("The Kiosk App"));
        assert!(text.contains("Place Your Order"));
        assert!(text.contains(" Menu "));
        assert!(text.contains(" Current Order "));
        assert!(text.contains("Process Order ($7.35)"));
        assert!(text.contains("Coca-Cola added."));
        assert!(text.contains("READY"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_banner_is_orange_while_payment_in_flight() {
        let (mut shell, _rx) = shell();
        shell.add_to_order(shell.catalog().items()[0].clone());
        assert!(shell.process_order(dec!(5.25)));
        shell.add_to_order(shell.catalog().items()[6].clone());
        let mut state = KioskScreenState::new();

        let buf = render(&shell, &mut state);

        assert!(shell.is_processing());
        let (x, y) = find_text(&buf, "Mango Lassi added.").unwrap();
        assert_eq!(buf[(x, y)].bg, Color::Indexed(208));
    }

    #[tokio::test(start_paused = true)]
    async fn test_banner_is_blue_once_payment_completes() {
        let (mut shell, mut rx) = shell();
        shell.add_to_order(shell.catalog().items()[0].clone());
        shell.process_order(dec!(5.25));
        let event = rx.recv().await.unwrap();
        shell.handle_event(event);
        let mut state = KioskScreenState::new();

        let buf = render(&shell, &mut state);

        let (x, y) = find_text(&buf, "Order successfully processed!").unwrap();
        assert_eq!(buf[(x, y)].bg, Color::Blue);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clicks_route_to_panels() {
        let (mut shell, _rx) = shell();
        shell.add_to_order(shell.catalog().items()[0].clone());
        let mut state = KioskScreenState::new();
        let buf = render(&shell, &mut state);

        let (x, y) = find_text(&buf, "Process Order").unwrap();
        let command = state.handle_click(x, y, &shell);

        assert_eq!(command, Some(ScreenCommand::ProcessOrder(dec!(5.25))));
        assert_eq!(state.focus(), FocusContext::Order);

        let (x, y) = find_text(&buf, "Spring Rolls").unwrap();
        let command = state.handle_click(x, y, &shell);

        assert_eq!(
            command,
            Some(ScreenCommand::AddItem(shell.catalog().items()[1].clone()))
        );
        assert_eq!(state.focus(), FocusContext::Menu);
    }
}
