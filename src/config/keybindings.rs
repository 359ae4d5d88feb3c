//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. Only consulted outside text entry:
/// while the search bar or the editor dialog is open, keys go to the field.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&normalize(key)).copied()
    }

    /// Keys bound to `action`, rendered for the help overlay ("j", "Down").
    pub fn keys_for(&self, action: KeyAction) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| describe(*key))
            .collect();
        keys.sort();
        keys
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Row cursor
        bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::RowDown);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::RowDown);
        bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::RowUp);
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::RowUp);

        // Pagination
        bind(KeyCode::Char(']'), KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::Char('['), KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::Char('p'), KeyModifiers::NONE, KeyAction::CyclePageSize);

        // Search
        bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::StartSearch);
        bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);
        bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::ClearSearch);

        // Records
        bind(KeyCode::Char('n'), KeyModifiers::NONE, KeyAction::NewPost);
        bind(KeyCode::Char('e'), KeyModifiers::NONE, KeyAction::EditPost);
        bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::EditPost);
        bind(KeyCode::Char('d'), KeyModifiers::NONE, KeyAction::DeletePost);
        bind(KeyCode::Delete, KeyModifiers::NONE, KeyAction::DeletePost);
        bind(KeyCode::Char('r'), KeyModifiers::NONE, KeyAction::Refresh);

        // Application controls
        bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::SwitchScreen);
        bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        Self { bindings }
    }
}

/// Terminals disagree on whether '?' arrives with SHIFT. Bindings are stored
/// without it for printable characters.
fn normalize(key: KeyEvent) -> KeyEvent {
    match key.code {
        KeyCode::Char(_) => KeyEvent::new(key.code, key.modifiers.difference(KeyModifiers::SHIFT)),
        _ => KeyEvent::new(key.code, key.modifiers),
    }
}

fn describe(key: KeyEvent) -> String {
    let name = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Delete => "Del".to_string(),
        other => format!("{other:?}"),
    };
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl+{name}")
    } else {
        name
    }
}
