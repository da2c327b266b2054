pub mod parser;
pub mod preset;

use std::collections::HashMap;

use crossterm::event::KeyEvent;

use crate::error::{NoteError, Result};
use preset::{get_preset, Action};

pub struct KeybindingMap {
    bindings: HashMap<KeyEvent, Action>,
}

impl KeybindingMap {
    pub fn from_preset(name: &str, overrides: &HashMap<String, String>) -> Result<Self> {
        let mut bindings = get_preset(name)
            .ok_or_else(|| NoteError::Config(format!("Unknown keybinding preset: {}", name)))?;

        for (action_name, key_str) in overrides {
            let action = Action::from_str(action_name)
                .ok_or_else(|| NoteError::Config(format!("Unknown action: {}", action_name)))?;
            let key_event = parser::parse_key(key_str)?;

            bindings.retain(|_, v| v != &action);
            bindings.insert(key_event, action);
        }

        Ok(Self { bindings })
    }

    pub fn resolve(&self, key: &KeyEvent) -> Option<&Action> {
        self.bindings.get(key)
    }

    pub fn hints(&self) -> Vec<(String, &'static str)> {
        let important = [
            Action::Quit,
            Action::Select,
            Action::GoHome,
            Action::ToggleSidebar,
            Action::Help,
        ];

        let mut hints = Vec::new();
        for action in &important {
            if let Some((key_event, _)) = self.bindings.iter().find(|(_, a)| *a == action) {
                hints.push((format_key_event(key_event), action.hint_text()));
            }
        }
        hints
    }
}

fn format_key_event(key: &KeyEvent) -> String {
    use crossterm::event::{KeyCode, KeyModifiers};

    let mut parts = Vec::new();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift".to_string());
    }

    let key_str = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };
    parts.push(key_str);

    parts.join("+")
}
