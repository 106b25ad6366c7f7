use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;

/// What a key press asks the UI to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Leave the application.
    Quit,
    /// Move focus to the other panel.
    FocusNext,

    // Menu
    /// Select the previous category tab.
    PreviousCategory,
    /// Select the next category tab.
    NextCategory,
    /// Move the highlight up.
    NavigateUp,
    /// Move the highlight down.
    NavigateDown,
    /// Add the highlighted or given item.
    AddItem,

    // Order
    /// Remove the highlighted order line.
    RemoveItem,
    /// Pay for the order.
    ProcessOrder,
}

/// A key bound to an [`Action`], with its footer hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    /// Key that triggers the binding.
    pub key: KeyEvent,
    /// What the key does.
    pub action: Action,
    /// Hint text shown in the footer.
    pub label: Cow<'static, str>,
    /// Overrides the rendered key name.
    pub key_display: Option<Cow<'static, str>>,
    /// Whether the footer lists the binding.
    pub visible_in_bar: bool,
}

impl Keybind {
    /// Binds `key` to `action`, hinted in the footer as `label`.
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            key_display: None,
            visible_in_bar: true,
        }
    }

    /// Overrides the key text shown in the footer.
    #[must_use]
    pub fn with_display(mut self, display: impl Into<Cow<'static, str>>) -> Self {
        self.key_display = Some(display.into());
        self
    }

    /// Keeps the binding out of the footer.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    /// Whether `key` triggers this binding. Shift is ignored for characters.
    #[must_use]
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if self.key.code != key.code {
            return false;
        }
        let relevant = if matches!(key.code, KeyCode::Char(_)) {
            key.modifiers.difference(KeyModifiers::SHIFT)
        } else {
            key.modifiers
        };
        relevant == self.key.modifiers
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Bindings active while the menu panel has focus.
#[must_use]
pub fn menu_keybindings() -> Vec<Keybind> {
    vec![
        Keybind::new(key(KeyCode::Left), Action::PreviousCategory, "Category")
            .with_display("←/→"),
        Keybind::new(key(KeyCode::Right), Action::NextCategory, "Category").hidden(),
        Keybind::new(key(KeyCode::Char('h')), Action::PreviousCategory, "Category").hidden(),
        Keybind::new(key(KeyCode::Char('l')), Action::NextCategory, "Category").hidden(),
        Keybind::new(key(KeyCode::Up), Action::NavigateUp, "Up").hidden(),
        Keybind::new(key(KeyCode::Down), Action::NavigateDown, "Down").hidden(),
        Keybind::new(key(KeyCode::Char('k')), Action::NavigateUp, "Up").hidden(),
        Keybind::new(key(KeyCode::Char('j')), Action::NavigateDown, "Down").hidden(),
        Keybind::new(key(KeyCode::Enter), Action::AddItem, "Add"),
        Keybind::new(key(KeyCode::Char('a')), Action::AddItem, "Add").hidden(),
    ]
}

/// Bindings active while the order panel has focus.
#[must_use]
pub fn order_keybindings() -> Vec<Keybind> {
    vec![
        Keybind::new(key(KeyCode::Up), Action::NavigateUp, "Move").with_display("↑/↓"),
        Keybind::new(key(KeyCode::Down), Action::NavigateDown, "Down").hidden(),
        Keybind::new(key(KeyCode::Char('k')), Action::NavigateUp, "Up").hidden(),
        Keybind::new(key(KeyCode::Char('j')), Action::NavigateDown, "Down").hidden(),
        Keybind::new(key(KeyCode::Char('d')), Action::RemoveItem, "Remove"),
        Keybind::new(key(KeyCode::Delete), Action::RemoveItem, "Remove").hidden(),
        Keybind::new(key(KeyCode::Char('x')), Action::RemoveItem, "Remove").hidden(),
        Keybind::new(key(KeyCode::Enter), Action::ProcessOrder, "Process").hidden(),
    ]
}

/// Bindings active regardless of focus.
#[must_use]
pub fn global_keybindings() -> Vec<Keybind> {
    vec![
        Keybind::new(key(KeyCode::Tab), Action::FocusNext, "Switch"),
        Keybind::new(key(KeyCode::Char('p')), Action::ProcessOrder, "Process"),
        Keybind::new(key(KeyCode::Char('q')), Action::Quit, "Quit"),
        Keybind::new(key(KeyCode::Esc), Action::Quit, "Quit").hidden(),
        Keybind::new(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Quit,
            "Quit",
        )
        .hidden(),
    ]
}

/// Resolves `key` against focus-specific bindings first, then global ones.
#[must_use]
pub fn resolve(focused: &[Keybind], global: &[Keybind], key: &KeyEvent) -> Option<Action> {
    focused
        .iter()
        .chain(global)
        .find(|binding| binding.matches(key))
        .map(|binding| binding.action)
}
