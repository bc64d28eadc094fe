//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key plus modifiers
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default key map
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // Results
    pub const NEXT: KeyBinding = KeyBinding::key(KeyCode::Right);
    pub const PREV: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const SWITCH_PANEL: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const PROCEDURES: KeyBinding = KeyBinding::key(KeyCode::Char('1'));
    pub const PRODUCTS: KeyBinding = KeyBinding::key(KeyCode::Char('2'));
}
