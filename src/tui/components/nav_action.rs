//! Navigation actions and the keybinding table.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::tui::state::ViewState;

/// Actions the root router responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    // Views
    SelectView(ViewState),
    NextView,
    PrevView,
    // Landing calls to action
    Consult,
    ViewData,
    // Toast
    DismissTip,
    // Scrolling
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    Quit,
}

/// A keybinding maps a key combination to an action
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: NavAction,
}

impl KeyBinding {
    pub const fn new(key: KeyCode, modifiers: KeyModifiers, action: NavAction) -> Self {
        Self {
            key,
            modifiers,
            action,
        }
    }

    const fn plain(key: KeyCode, action: NavAction) -> Self {
        Self::new(key, KeyModifiers::NONE, action)
    }
}

/// Returns the default keybindings.
pub fn default_keybindings() -> Vec<KeyBinding> {
    let mut bindings: Vec<KeyBinding> = ViewState::ALL
        .into_iter()
        .zip('1'..='9')
        .map(|(view, digit)| KeyBinding::plain(KeyCode::Char(digit), NavAction::SelectView(view)))
        .collect();

    bindings.extend([
        KeyBinding::plain(KeyCode::Tab, NavAction::NextView),
        // Terminals disagree on whether BackTab carries SHIFT
        KeyBinding::plain(KeyCode::BackTab, NavAction::PrevView),
        KeyBinding::new(KeyCode::BackTab, KeyModifiers::SHIFT, NavAction::PrevView),
        KeyBinding::plain(KeyCode::Char('c'), NavAction::Consult),
        KeyBinding::plain(KeyCode::Char('d'), NavAction::ViewData),
        KeyBinding::plain(KeyCode::Char('x'), NavAction::DismissTip),
        KeyBinding::plain(KeyCode::Esc, NavAction::DismissTip),
        KeyBinding::plain(KeyCode::Up, NavAction::ScrollUp),
        KeyBinding::plain(KeyCode::Char('k'), NavAction::ScrollUp),
        KeyBinding::plain(KeyCode::Down, NavAction::ScrollDown),
        KeyBinding::plain(KeyCode::Char('j'), NavAction::ScrollDown),
        KeyBinding::plain(KeyCode::PageUp, NavAction::PageUp),
        KeyBinding::plain(KeyCode::PageDown, NavAction::PageDown),
        KeyBinding::plain(KeyCode::Home, NavAction::ScrollTop),
        KeyBinding::plain(KeyCode::Char('q'), NavAction::Quit),
        KeyBinding::new(KeyCode::Char('c'), KeyModifiers::CONTROL, NavAction::Quit),
    ]);

    bindings
}

/// Build a lookup map from key combinations to actions
pub fn build_keybinding_map(bindings: &[KeyBinding]) -> HashMap<(KeyCode, KeyModifiers), NavAction> {
    bindings
        .iter()
        .map(|b| ((b.key, b.modifiers), b.action))
        .collect()
}
