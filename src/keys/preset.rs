use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    Select,
    GoHome,
    ToggleSidebar,
    SidebarShrink,
    SidebarGrow,
    FocusEditor,
    Help,
    Quit,
}

impl Action {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "move_up" => Some(Self::MoveUp),
            "move_down" => Some(Self::MoveDown),
            "select" => Some(Self::Select),
            "go_home" => Some(Self::GoHome),
            "toggle_sidebar" => Some(Self::ToggleSidebar),
            "sidebar_shrink" => Some(Self::SidebarShrink),
            "sidebar_grow" => Some(Self::SidebarGrow),
            "focus_editor" => Some(Self::FocusEditor),
            "help" => Some(Self::Help),
            "quit" => Some(Self::Quit),
            _ => None,
        }
    }

    pub fn hint_text(&self) -> &'static str {
        match self {
            Self::MoveUp => "up",
            Self::MoveDown => "down",
            Self::Select => "open",
            Self::GoHome => "home",
            Self::ToggleSidebar => "sidebar",
            Self::SidebarShrink => "narrower",
            Self::SidebarGrow => "wider",
            Self::FocusEditor => "edit",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::CONTROL)
}

fn alt(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::ALT)
}

fn shift(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::SHIFT)
}

pub fn vim_preset() -> HashMap<KeyEvent, Action> {
    let mut m = HashMap::new();
    m.insert(key(KeyCode::Char('k')), Action::MoveUp);
    m.insert(key(KeyCode::Up), Action::MoveUp);
    m.insert(key(KeyCode::Char('j')), Action::MoveDown);
    m.insert(key(KeyCode::Down), Action::MoveDown);
    m.insert(key(KeyCode::Enter), Action::Select);
    m.insert(key(KeyCode::Char('g')), Action::GoHome);
    m.insert(key(KeyCode::Char('b')), Action::ToggleSidebar);
    m.insert(key(KeyCode::Char('<')), Action::SidebarShrink);
    m.insert(key(KeyCode::Char('>')), Action::SidebarGrow);
    m.insert(key(KeyCode::Char('i')), Action::FocusEditor);
    m.insert(key(KeyCode::Char('?')), Action::Help);
    m.insert(key(KeyCode::Char('q')), Action::Quit);
    m
}

pub fn emacs_preset() -> HashMap<KeyEvent, Action> {
    let mut m = HashMap::new();
    m.insert(ctrl(KeyCode::Char('p')), Action::MoveUp);
    m.insert(key(KeyCode::Up), Action::MoveUp);
    m.insert(ctrl(KeyCode::Char('n')), Action::MoveDown);
    m.insert(key(KeyCode::Down), Action::MoveDown);
    m.insert(key(KeyCode::Enter), Action::Select);
    m.insert(ctrl(KeyCode::Char('w')), Action::GoHome);
    m.insert(ctrl(KeyCode::Char('b')), Action::ToggleSidebar);
    m.insert(alt(KeyCode::Char('<')), Action::SidebarShrink);
    m.insert(alt(KeyCode::Char('>')), Action::SidebarGrow);
    m.insert(ctrl(KeyCode::Char('o')), Action::FocusEditor);
    m.insert(ctrl(KeyCode::Char('h')), Action::Help);
    m.insert(ctrl(KeyCode::Char('q')), Action::Quit);
    m
}

pub fn vscode_preset() -> HashMap<KeyEvent, Action> {
    let mut m = HashMap::new();
    m.insert(key(KeyCode::Up), Action::MoveUp);
    m.insert(key(KeyCode::Down), Action::MoveDown);
    m.insert(key(KeyCode::Enter), Action::Select);
    m.insert(ctrl(KeyCode::Home), Action::GoHome);
    m.insert(ctrl(KeyCode::Char('b')), Action::ToggleSidebar);
    m.insert(shift(KeyCode::Left), Action::SidebarShrink);
    m.insert(shift(KeyCode::Right), Action::SidebarGrow);
    m.insert(ctrl(KeyCode::Char('e')), Action::FocusEditor);
    m.insert(key(KeyCode::F(1)), Action::Help);
    m.insert(ctrl(KeyCode::Char('q')), Action::Quit);
    m
}

pub fn get_preset(name: &str) -> Option<HashMap<KeyEvent, Action>> {
    match name.to_lowercase().as_str() {
        "vim" => Some(vim_preset()),
        "emacs" => Some(emacs_preset()),
        "vscode" => Some(vscode_preset()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_presets_exist() {
        assert!(get_preset("vim").is_some());
        assert!(get_preset("emacs").is_some());
        assert!(get_preset("vscode").is_some());
        assert!(get_preset("nano").is_none());
    }

    #[test]
    fn preset_lookup_case_insensitive() {
        assert!(get_preset("VIM").is_some());
    }

    #[test]
    fn every_action_bound_in_vim() {
        let preset = vim_preset();
        for action in [
            Action::MoveUp,
            Action::MoveDown,
            Action::Select,
            Action::GoHome,
            Action::ToggleSidebar,
            Action::SidebarShrink,
            Action::SidebarGrow,
            Action::FocusEditor,
            Action::Help,
            Action::Quit,
        ] {
            assert!(
                preset.values().any(|a| *a == action),
                "vim preset missing {:?}",
                action
            );
        }
    }

    #[test]
    fn action_from_str_round_trips() {
        assert_eq!(Action::from_str("move_up"), Some(Action::MoveUp));
        assert_eq!(Action::from_str("QUIT"), Some(Action::Quit));
        assert_eq!(Action::from_str("bogus"), None);
    }
}
