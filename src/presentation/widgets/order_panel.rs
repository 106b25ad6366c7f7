//! Cart contents, totals and the process button.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget, Wrap},
};
use rust_decimal::Decimal;
use unicode_width::UnicodeWidthStr;

use crate::domain::keybinding::Action;
use crate::domain::money::{format_money, format_percent};
use crate::domain::{Order, OrderTotals};
use crate::presentation::events::hit;
use crate::presentation::theme::Theme;

const REMOVE_LABEL: &str = "[X]";
const EMPTY_PLACEHOLDER: &str = "Order is empty. Add items from the menu.";

/// Actions emitted by the order panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderPanelAction {
    /// Remove the line at this position.
    Remove(usize),
    /// Pay the given total.
    Process(Decimal),
}

/// Styles for [`OrderPanel`].
#[allow(missing_docs)]
pub struct OrderPanelStyle {
    pub border_style: Style,
    pub border_style_focused: Style,
    pub title_style: Style,
    pub line_style: Style,
    pub price_style: Style,
    /// Style of the `[X]` control.
    pub remove_style: Style,
    pub placeholder_style: Style,
    pub total_style: Style,
    pub button_style: Style,
    pub button_disabled_style: Style,
    pub selected_style: Style,
}

impl OrderPanelStyle {
    /// Derives the styles from `theme`.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            border_style_focused: Style::default().fg(theme.accent),
            title_style: Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            price_style: theme.price_style,
            placeholder_style: theme.dimmed_style,
            selected_style: theme.selection_style,
            ..Self::default()
        }
    }
}

impl Default for OrderPanelStyle {
    fn default() -> Self {
        Self {
            border_style: Style::default().fg(Color::DarkGray),
            border_style_focused: Style::default().fg(Color::Red),
            title_style: Style::default().add_modifier(Modifier::BOLD),
            line_style: Style::default(),
            price_style: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            remove_style: Style::default().fg(Color::LightRed),
            placeholder_style: Style::default().fg(Color::DarkGray),
            total_style: Style::default().add_modifier(Modifier::BOLD),
            button_style: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            button_disabled_style: Style::default().bg(Color::DarkGray).fg(Color::Gray),
            selected_style: Style::default().bg(Color::DarkGray),
        }
    }
}

/// Highlighted line and click targets from the last render.
#[derive(Debug, Clone, Default)]
pub struct OrderPanelState {
    selected: usize,
    focused: bool,
    remove_hits: Vec<(Rect, usize)>,
    process_hit: Option<Rect>,
}

impl OrderPanelState {
    /// Creates state with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the panel has focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Marks the panel as focused or not.
    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Index of the highlighted row.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    fn process(order: &Order, totals: &OrderTotals) -> Option<OrderPanelAction> {
        (!order.is_empty()).then_some(OrderPanelAction::Process(totals.total))
    }

    /// Applies a key action; removal and processing come back as an [`OrderPanelAction`].
    pub fn handle_action(
        &mut self,
        action: Action,
        order: &Order,
        totals: &OrderTotals,
    ) -> Option<OrderPanelAction> {
        let last = order.len().saturating_sub(1);
        self.selected = self.selected.min(last);
        match action {
            Action::NavigateUp => self.selected = self.selected.saturating_sub(1),
            Action::NavigateDown => self.selected = (self.selected + 1).min(last),
            Action::RemoveItem if !order.is_empty() => {
                return Some(OrderPanelAction::Remove(self.selected));
            }
            Action::ProcessOrder => return Self::process(order, totals),
            _ => {}
        }
        None
    }

    /// Applies a click on a line's remove control or the process button.
    pub fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        order: &Order,
        totals: &OrderTotals,
    ) -> Option<OrderPanelAction> {
        if let Some(position) = self
            .remove_hits
            .iter()
            .find(|(rect, _)| hit(*rect, column, row))
            .map(|(_, position)| *position)
        {
            return (position < order.len()).then_some(OrderPanelAction::Remove(position));
        }

        if self.process_hit.is_some_and(|rect| hit(rect, column, row)) {
            return Self::process(order, totals);
        }
        None
    }
}

/// Order lines, totals and the process button.
pub struct OrderPanel<'a> {
    order: &'a Order,
    totals: OrderTotals,
    tax_rate: Decimal,
    style: OrderPanelStyle,
}

impl<'a> OrderPanel<'a> {
    /// Renders `order` with precomputed `totals`. `tax_rate` labels the tax line.
    #[must_use]
    pub fn new(order: &'a Order, totals: OrderTotals, tax_rate: Decimal) -> Self {
        Self {
            order,
            totals,
            tax_rate,
            style: OrderPanelStyle::default(),
        }
    }

    /// Overrides the default styles.
    #[must_use]
    pub fn style(mut self, style: OrderPanelStyle) -> Self {
        self.style = style;
        self
    }

    fn render_lines(&self, area: Rect, buf: &mut Buffer, state: &mut OrderPanelState) {
        if self.order.is_empty() {
            let placeholder = Paragraph::new(EMPTY_PLACEHOLDER)
                .style(self.style.placeholder_style)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            let top = area.y.saturating_add(1).min(area.bottom());
            placeholder.render(
                Rect::new(area.x, top, area.width, area.bottom() - top),
                buf,
            );
            return;
        }

        let rows = usize::from(area.height);
        if rows == 0 {
            return;
        }
        let offset = (state.selected + 1).saturating_sub(rows);

        for (position, item) in self.order.lines().iter().enumerate().skip(offset).take(rows) {
            #[allow(clippy::cast_possible_truncation)]
            let y = area.y + (position - offset) as u16;
            let row = Rect::new(area.x, y, area.width, 1);
            if state.focused && position == state.selected {
                buf.set_style(row, self.style.selected_style);
            }

            let price = format_money(item.price());
            #[allow(clippy::cast_possible_truncation)]
            let right_width = (price.width() + 1 + REMOVE_LABEL.width()) as u16;
            let right_x = row.right().saturating_sub(right_width).max(row.x);
            let name_width = usize::from(right_x.saturating_sub(row.x).saturating_sub(1));
            buf.set_stringn(row.x, y, item.name(), name_width, self.style.line_style);

            let (x, _) = buf.set_stringn(
                right_x,
                y,
                &price,
                usize::from(row.right() - right_x),
                self.style.price_style,
            );
            let remove_x = x.saturating_add(1);
            if remove_x < row.right() {
                let (end_x, _) = buf.set_stringn(
                    remove_x,
                    y,
                    REMOVE_LABEL,
                    usize::from(row.right() - remove_x),
                    self.style.remove_style,
                );
                state
                    .remove_hits
                    .push((Rect::new(remove_x, y, end_x - remove_x, 1), position));
            }
        }
    }

    fn render_totals(&self, area: Rect, buf: &mut Buffer) {
        let width = usize::from(area.width);
        let row = |label: String, amount: Decimal, style: Style| {
            let amount = format_money(amount);
            let padding = width.saturating_sub(label.width() + amount.width());
            Line::from(vec![
                Span::styled(label, style),
                Span::raw(" ".repeat(padding)),
                Span::styled(amount, style),
            ])
        };

        let lines = vec![
            Line::from(Span::styled(
                "─".repeat(width),
                self.style.placeholder_style,
            )),
            row("Subtotal:".into(), self.totals.subtotal, self.style.line_style),
            row(
                format!("Tax ({}):", format_percent(self.tax_rate)),
                self.totals.tax,
                self.style.line_style,
            ),
            row("Total:".into(), self.totals.total, self.style.total_style),
        ];
        Paragraph::new(lines).render(area, buf);
    }

    fn render_button(&self, area: Rect, buf: &mut Buffer, state: &mut OrderPanelState) {
        let style = if self.order.is_empty() {
            self.style.button_disabled_style
        } else {
            self.style.button_style
        };
        let label = format!("Process Order ({})", format_money(self.totals.total));
        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).style(style));
        button.render(area, buf);
        state.process_hit = Some(area);
    }
}

impl StatefulWidget for OrderPanel<'_> {
    type State = OrderPanelState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.remove_hits.clear();
        state.process_hit = None;
        state.selected = state.selected.min(self.order.len().saturating_sub(1));

        let border_style = if state.is_focused() {
            self.style.border_style_focused
        } else {
            self.style.border_style
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(" Current Order ", self.style.title_style));
        let inner = block.inner(area);
        block.render(area, buf);

        let [lines_area, totals_area, button_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .areas(inner);

        self.render_lines(lines_area, buf, state);
        self.render_totals(totals_area, buf);
        self.render_button(button_area, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;
    use crate::presentation::widgets::test_utils::{buffer_lines, find_text, find_text_in_row};
    use rust_decimal_macros::dec;

    const TAX: Decimal = dec!(0.05);

    fn sample_order() -> Order {
        let catalog = Catalog::builtin();
        let mut order = Order::new();
        order.push(catalog.items()[0].clone());
        order.push(catalog.items()[5].clone());
        order
    }

    fn render(order: &Order, state: &mut OrderPanelState) -> Buffer {
        let area = Rect::new(0, 0, 40, 16);
        let mut buf = Buffer::empty(area);
        OrderPanel::new(order, order.totals(TAX), TAX).render(area, &mut buf, state);
        buf
    }

    #[test]
    fn test_render_empty_order() {
        let order = Order::new();
        let mut state = OrderPanelState::new();

        let text = buffer_lines(&render(&order, &mut state)).join("\n");

        assert!(text.contains("Order is empty."));
        assert!(text.contains("Subtotal:"));
        assert!(text.contains("$0.00"));
        assert!(text.contains("Process Order ($0.00)"));
    }

    #[test]
    fn test_render_sample_order() {
        let order = sample_order();
        let mut state = OrderPanelState::new();

        let lines = buffer_lines(&render(&order, &mut state));
        let text = lines.join("\n");

        assert!(lines[1].contains("Samosa") && lines[1].contains("$5.00"));
        assert!(lines[2].contains("Coca-Cola") && lines[2].contains("$2.00"));
        assert!(text.contains("Tax (5%):"));
        assert!(text.contains("$0.35"));
        assert!(text.contains("Process Order ($7.35)"));
        assert!(!text.contains("Order is empty."));
    }

    #[test]
    fn test_process_disabled_when_empty() {
        let order = Order::new();
        let totals = order.totals(TAX);
        let mut state = OrderPanelState::new();
        let buf = render(&order, &mut state);

        assert_eq!(state.handle_action(Action::ProcessOrder, &order, &totals), None);
        let (x, y) = find_text(&buf, "Process Order").unwrap();
        assert_eq!(state.handle_click(x, y, &order, &totals), None);
    }

    #[test]
    fn test_process_passes_total() {
        let order = sample_order();
        let totals = order.totals(TAX);
        let mut state = OrderPanelState::new();
        let buf = render(&order, &mut state);

        assert_eq!(
            state.handle_action(Action::ProcessOrder, &order, &totals),
            Some(OrderPanelAction::Process(dec!(7.35)))
        );
        let (x, y) = find_text(&buf, "Process Order").unwrap();
        assert_eq!(
            state.handle_click(x, y, &order, &totals),
            Some(OrderPanelAction::Process(dec!(7.35)))
        );
    }

    #[test]
    fn test_remove_targets_position() {
        let mut order = sample_order();
        order.push(Catalog::builtin().items()[0].clone());
        let totals = order.totals(TAX);
        let mut state = OrderPanelState::new();

        state.handle_action(Action::NavigateDown, &order, &totals);
        state.handle_action(Action::NavigateDown, &order, &totals);
        state.handle_action(Action::NavigateDown, &order, &totals);

        assert_eq!(
            state.handle_action(Action::RemoveItem, &order, &totals),
            Some(OrderPanelAction::Remove(2))
        );
    }

    #[test]
    fn test_click_remove_control() {
        let order = sample_order();
        let totals = order.totals(TAX);
        let mut state = OrderPanelState::new();
        let buf = render(&order, &mut state);

        let column = find_text_in_row(&buf, 2, "[X]").unwrap();
        let action = state.handle_click(column, 2, &order, &totals);

        assert_eq!(action, Some(OrderPanelAction::Remove(1)));
    }

    #[test]
    fn test_remove_on_empty_order_is_noop() {
        let order = Order::new();
        let totals = order.totals(TAX);
        let mut state = OrderPanelState::new();

        assert_eq!(state.handle_action(Action::RemoveItem, &order, &totals), None);
    }
}
