use std::collections::HashMap;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::AppConfig;
use crate::keys::KeybindingMap;
use crate::tree::FileNode;

use super::state::AppState;

pub fn test_state() -> AppState {
    AppState::new(&AppConfig::default(), vec![])
}

pub fn test_keybindings() -> KeybindingMap {
    KeybindingMap::from_preset("vim", &HashMap::new()).unwrap()
}

pub fn key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::CONTROL)
}

/// State with `file_name` already open in the block editor.
pub fn editor_state(file_name: &str) -> AppState {
    let mut state = test_state();
    let path = format!("/test/{}", file_name);
    state.open_file(FileNode::file(file_name, &path));
    state
}

/// Feed one character through the full key-handling path.
pub fn type_char(state: &mut AppState, ch: char) {
    let keys = test_keybindings();
    super::input::handle_key(state, &key_event(KeyCode::Char(ch)), &keys, Instant::now());
}
