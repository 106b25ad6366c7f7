//! Event handling.

use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Terminal input classification helpers.
pub struct EventHandler;

impl EventHandler {
    /// Whether the key event is a press (repeat and release are ignored).
    #[must_use]
    pub fn is_press(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press
    }

    /// Returns the cell of a left-button press.
    #[must_use]
    pub const fn left_click(mouse: &MouseEvent) -> Option<(u16, u16)> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some((mouse.column, mouse.row)),
            _ => None,
        }
    }
}

/// Whether the cell at `column`, `row` lies inside `rect`.
#[must_use]
pub const fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
