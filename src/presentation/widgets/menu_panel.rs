//! Category filter and item list.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::keybinding::Action;
use crate::domain::money::format_money;
use crate::domain::{Catalog, MenuItem};
use crate::presentation::events::hit;
use crate::presentation::theme::Theme;

const ADD_LABEL: &str = "[ Add ]";

/// Actions emitted by the menu panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuPanelAction {
    /// Add a copy of this item to the order.
    AddItem(MenuItem),
}

/// Styles for [`MenuPanel`].
#[allow(missing_docs)]
pub struct MenuPanelStyle {
    pub border_style: Style,
    pub border_style_focused: Style,
    pub title_style: Style,
    pub tab_style: Style,
    pub tab_active_style: Style,
    pub name_style: Style,
    pub category_style: Style,
    pub price_style: Style,
    /// Style of the `[ Add ]` control.
    pub add_style: Style,
    pub selected_style: Style,
}

impl MenuPanelStyle {
    /// Derives the styles from `theme`.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            border_style_focused: Style::default().fg(theme.accent),
            title_style: Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            tab_active_style: Style::default()
                .bg(theme.accent)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            category_style: theme.dimmed_style,
            price_style: theme.price_style,
            selected_style: theme.selection_style,
            ..Self::default()
        }
    }
}

impl Default for MenuPanelStyle {
    fn default() -> Self {
        Self {
            border_style: Style::default().fg(Color::DarkGray),
            border_style_focused: Style::default().fg(Color::Red),
            title_style: Style::default().add_modifier(Modifier::BOLD),
            tab_style: Style::default().bg(Color::DarkGray).fg(Color::Gray),
            tab_active_style: Style::default()
                .bg(Color::Red)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            name_style: Style::default().add_modifier(Modifier::BOLD),
            category_style: Style::default().fg(Color::DarkGray),
            price_style: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            add_style: Style::default()
                .bg(Color::Green)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            selected_style: Style::default().bg(Color::DarkGray),
        }
    }
}

/// Menu panel state: active filter, highlighted row and click targets from
/// the last render.
#[derive(Debug, Clone, Default)]
pub struct MenuPanelState {
    active_category: Option<String>,
    selected: usize,
    focused: bool,
    category_hits: Vec<(Rect, String)>,
    item_hits: Vec<(Rect, usize)>,
}

impl MenuPanelState {
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

    /// The active category, defaulting to the catalog's first one.
    #[must_use]
    pub fn active_category<'a>(&'a self, catalog: &'a Catalog) -> Option<&'a str> {
        let categories = catalog.categories();
        self.active_category
            .as_deref()
            .filter(|active| categories.contains(active))
            .or_else(|| categories.first().copied())
    }

    /// Items shown under the active category, in catalog order.
    #[must_use]
    pub fn visible_items<'a>(&self, catalog: &'a Catalog) -> Vec<&'a MenuItem> {
        self.active_category(catalog)
            .map(move |active| catalog.items_in(active))
            .unwrap_or_default()
    }

    /// Switches the filter and moves the highlight to the first item.
    pub fn select_category(&mut self, category: &str) {
        if self.active_category.as_deref() != Some(category) {
            self.active_category = Some(category.to_string());
            self.selected = 0;
        }
    }

    fn cycle_category(&mut self, catalog: &Catalog, forward: bool) {
        let categories = catalog.categories();
        if categories.is_empty() {
            return;
        }
        let current = self
            .active_category(catalog)
            .and_then(|active| categories.iter().position(|c| *c == active))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % categories.len()
        } else {
            (current + categories.len() - 1) % categories.len()
        };
        let category = categories[next].to_string();
        self.select_category(&category);
    }

    fn selected_item(&self, catalog: &Catalog) -> Option<MenuItem> {
        self.visible_items(catalog)
            .get(self.selected)
            .map(|item| (*item).clone())
    }

    /// Applies a key action, returning the item to add if any.
    pub fn handle_action(&mut self, action: Action, catalog: &Catalog) -> Option<MenuPanelAction> {
        match action {
            Action::PreviousCategory => self.cycle_category(catalog, false),
            Action::NextCategory => self.cycle_category(catalog, true),
            Action::NavigateUp => self.selected = self.selected.saturating_sub(1),
            Action::NavigateDown => {
                let last = self.visible_items(catalog).len().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
            }
            Action::AddItem => return self.selected_item(catalog).map(MenuPanelAction::AddItem),
            _ => {}
        }
        None
    }

    /// Applies a click: tabs switch the filter, item rows add the item.
    pub fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        catalog: &Catalog,
    ) -> Option<MenuPanelAction> {
        if let Some(category) = self
            .category_hits
            .iter()
            .find(|(rect, _)| hit(*rect, column, row))
            .map(|(_, category)| category.clone())
        {
            self.select_category(&category);
            return None;
        }

        let index = self
            .item_hits
            .iter()
            .find(|(rect, _)| hit(*rect, column, row))
            .map(|(_, index)| *index)?;
        self.selected = index;
        self.selected_item(catalog).map(MenuPanelAction::AddItem)
    }
}

/// Category tabs above the items of the active category.
pub struct MenuPanel<'a> {
    catalog: &'a Catalog,
    style: MenuPanelStyle,
}

impl<'a> MenuPanel<'a> {
    /// Renders `catalog`.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            style: MenuPanelStyle::default(),
        }
    }

    /// Overrides the default styles.
    #[must_use]
    pub fn style(mut self, style: MenuPanelStyle) -> Self {
        self.style = style;
        self
    }

    fn render_tabs(&self, area: Rect, buf: &mut Buffer, state: &mut MenuPanelState) {
        let active = state.active_category(self.catalog).map(str::to_string);
        let mut x = area.x;

        for category in self.catalog.categories() {
            if x >= area.right() {
                break;
            }
            let label = format!(" {category} ");
            let style = if active.as_deref() == Some(category) {
                self.style.tab_active_style
            } else {
                self.style.tab_style
            };
            let max_width = usize::from(area.right() - x);
            let (end_x, _) = buf.set_stringn(x, area.y, &label, max_width, style);

            state
                .category_hits
                .push((Rect::new(x, area.y, end_x - x, 1), category.to_string()));
            x = end_x.saturating_add(1);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_item(
        &self,
        item: &MenuItem,
        row: Rect,
        selected: bool,
        buf: &mut Buffer,
    ) {
        if selected {
            buf.set_style(row, self.style.selected_style);
        }

        let price = format_money(item.price());
        let right_width = (price.width() + 2 + ADD_LABEL.width()) as u16;
        let right_x = row.right().saturating_sub(right_width).max(row.x);

        let left_width = usize::from(right_x.saturating_sub(row.x).saturating_sub(1));
        let (x, _) = buf.set_stringn(row.x, row.y, item.name(), left_width, self.style.name_style);
        let remaining = left_width.saturating_sub(usize::from(x - row.x));
        if remaining > 2 {
            buf.set_stringn(
                x + 2,
                row.y,
                item.category(),
                remaining - 2,
                self.style.category_style,
            );
        }

        let (x, _) = buf.set_stringn(
            right_x,
            row.y,
            &price,
            usize::from(right_width),
            self.style.price_style,
        );
        let add_x = x.saturating_add(2);
        if add_x < row.right() {
            buf.set_stringn(
                add_x,
                row.y,
                ADD_LABEL,
                usize::from(row.right() - add_x),
                self.style.add_style,
            );
        }
    }
}

impl StatefulWidget for MenuPanel<'_> {
    type State = MenuPanelState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.category_hits.clear();
        state.item_hits.clear();

        let border_style = if state.is_focused() {
            self.style.border_style_focused
        } else {
            self.style.border_style
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(" Menu ", self.style.title_style));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        self.render_tabs(Rect::new(inner.x, inner.y, inner.width, 1), buf, state);

        let items = state.visible_items(self.catalog);
        state.selected = state.selected.min(items.len().saturating_sub(1));

        let list_top = inner.y.saturating_add(2);
        let rows = usize::from(inner.bottom().saturating_sub(list_top));
        if rows == 0 {
            return;
        }
        let offset = (state.selected + 1).saturating_sub(rows);

        for (index, item) in items.iter().enumerate().skip(offset).take(rows) {
            #[allow(clippy::cast_possible_truncation)]
            let y = list_top + (index - offset) as u16;
            let row = Rect::new(inner.x, y, inner.width, 1);
            self.render_item(item, row, state.focused && index == state.selected, buf);
            state.item_hits.push((row, index));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::test_utils::{buffer_lines, find_text};

    fn render(state: &mut MenuPanelState, catalog: &Catalog) -> Buffer {
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        MenuPanel::new(catalog).render(area, &mut buf, state);
        buf
    }

    #[test]
    fn test_defaults_to_first_category() {
        let catalog = Catalog::builtin();
        let state = MenuPanelState::new();

        assert_eq!(state.active_category(&catalog), Some("Appetizers"));
        let names: Vec<&str> = state
            .visible_items(&catalog)
            .into_iter()
            .map(MenuItem::name)
            .collect();
        assert_eq!(names, vec!["Samosa", "Spring Rolls"]);
    }

    #[test]
    fn test_cycle_categories_wraps() {
        let catalog = Catalog::builtin();
        let mut state = MenuPanelState::new();

        state.handle_action(Action::PreviousCategory, &catalog);
        assert_eq!(state.active_category(&catalog), Some("Desserts"));

        state.handle_action(Action::NextCategory, &catalog);
        state.handle_action(Action::NextCategory, &catalog);
        assert_eq!(state.active_category(&catalog), Some("Main Courses"));
    }

    #[test]
    fn test_add_emits_selected_item_by_value() {
        let catalog = Catalog::builtin();
        let mut state = MenuPanelState::new();

        state.handle_action(Action::NextCategory, &catalog);
        state.handle_action(Action::NavigateDown, &catalog);
        state.handle_action(Action::NavigateDown, &catalog);
        state.handle_action(Action::NavigateDown, &catalog);
        let action = state.handle_action(Action::AddItem, &catalog);

        assert_eq!(
            action,
            Some(MenuPanelAction::AddItem(catalog.items()[4].clone()))
        );
    }

    #[test]
    fn test_switching_category_resets_selection() {
        let catalog = Catalog::builtin();
        let mut state = MenuPanelState::new();

        state.handle_action(Action::NavigateDown, &catalog);
        assert_eq!(state.selected(), 1);
        state.select_category("Drinks");

        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_render_shows_tabs_and_items() {
        let catalog = Catalog::builtin();
        let mut state = MenuPanelState::new();

        let lines = buffer_lines(&render(&mut state, &catalog));

        assert!(lines[1].contains(" Appetizers "));
        assert!(lines[1].contains(" Desserts "));
        assert!(lines[3].contains("Samosa"));
        assert!(lines[3].contains("$5.00"));
        assert!(lines[3].contains("[ Add ]"));
        assert!(lines[4].contains("Spring Rolls"));
        assert!(!lines.iter().any(|l| l.contains("Butter Chicken")));
    }

    #[test]
    fn test_click_tab_then_item() {
        let catalog = Catalog::builtin();
        let mut state = MenuPanelState::new();
        let buf = render(&mut state, &catalog);

        let (x, y) = find_text(&buf, "Drinks").unwrap();
        assert_eq!(state.handle_click(x, y, &catalog), None);
        assert_eq!(state.active_category(&catalog), Some("Drinks"));

        let buf = render(&mut state, &catalog);
        let (x, y) = find_text(&buf, "Mango Lassi").unwrap();
        let action = state.handle_click(x, y, &catalog);

        assert_eq!(
            action,
            Some(MenuPanelAction::AddItem(catalog.items()[6].clone()))
        );
    }

    #[test]
    fn test_click_outside_targets_is_ignored() {
        let catalog = Catalog::builtin();
        let mut state = MenuPanelState::new();
        render(&mut state, &catalog);

        assert_eq!(state.handle_click(0, 0, &catalog), None);
        assert_eq!(state.active_category(&catalog), Some("Appetizers"));
    }
}
