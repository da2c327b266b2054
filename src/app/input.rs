use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::caret;
use crate::keys::preset::Action;
use crate::keys::KeybindingMap;

use super::commands::{self, apply::apply};
use super::menu;
use super::state::{AppState, Focus};

pub const SIDEBAR_MIN_PERCENT: u8 = 15;
pub const SIDEBAR_MAX_PERCENT: u8 = 60;
pub const SIDEBAR_STEP_PERCENT: u8 = 5;

pub fn handle_key(state: &mut AppState, key: &KeyEvent, keybindings: &KeybindingMap, now: Instant) {
    if state.show_help {
        // Any key closes help
        state.show_help = false;
        return;
    }
    match state.focus {
        Focus::Tree => handle_tree_key(state, key, keybindings),
        Focus::Editor => handle_editor_key(state, key, now),
    }
}

// --- Tree / shell key handling ---

fn handle_tree_key(state: &mut AppState, key: &KeyEvent, keybindings: &KeybindingMap) {
    let Some(action) = keybindings.resolve(key) else {
        return;
    };
    match action {
        Action::Quit => state.should_quit = true,
        Action::MoveUp => state.tree.move_up(),
        Action::MoveDown => state.tree.move_down(),
        Action::Select => {
            if let Some(file) = state.tree.activate() {
                state.open_file(file);
            }
        }
        Action::GoHome => state.go_home(),
        Action::ToggleSidebar => state.sidebar_open = !state.sidebar_open,
        Action::SidebarShrink => {
            state.sidebar_width_percent = state
                .sidebar_width_percent
                .saturating_sub(SIDEBAR_STEP_PERCENT)
                .max(SIDEBAR_MIN_PERCENT);
        }
        Action::SidebarGrow => {
            state.sidebar_width_percent =
                (state.sidebar_width_percent + SIDEBAR_STEP_PERCENT).min(SIDEBAR_MAX_PERCENT);
        }
        Action::FocusEditor => {
            if state.document.is_some() {
                state.focus = Focus::Editor;
            }
        }
        Action::Help => state.show_help = true,
    }
}

// --- Editor key handling ---

fn handle_editor_key(state: &mut AppState, key: &KeyEvent, now: Instant) {
    // Navigation, confirm and cancel are always consumed while the menu is
    // open; everything else falls through to normal editing.
    if state.menu.visible {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Up) => {
                menu::select_prev(state);
                return;
            }
            (KeyModifiers::NONE, KeyCode::Down) => {
                menu::select_next(state);
                return;
            }
            (KeyModifiers::NONE, KeyCode::Enter) => {
                confirm_command(state, now);
                return;
            }
            (KeyModifiers::NONE, KeyCode::Esc) => {
                menu::close(state, now);
                return;
            }
            _ => {}
        }
    }

    let Some(doc) = state.document.as_mut() else {
        state.focus = Focus::Tree;
        return;
    };

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Esc) => {
            state.focus = Focus::Tree;
            return;
        }
        (KeyModifiers::NONE, KeyCode::Char(ch)) | (KeyModifiers::SHIFT, KeyCode::Char(ch)) => {
            doc.buffer.insert_char(ch);
        }
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            if doc.buffer.cursor == 0 {
                doc.merge_with_previous();
            } else {
                doc.buffer.delete_back();
            }
        }
        (KeyModifiers::NONE, KeyCode::Delete) => doc.buffer.delete_forward(),
        (KeyModifiers::NONE, KeyCode::Enter) => doc.insert_newline(),
        (KeyModifiers::NONE, KeyCode::Left) => doc.buffer.move_left(),
        (KeyModifiers::NONE, KeyCode::Right) => doc.buffer.move_right(),
        (KeyModifiers::NONE, KeyCode::Up) => doc.move_up(),
        (KeyModifiers::NONE, KeyCode::Down) => doc.move_down(),
        (KeyModifiers::NONE, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => {
            doc.buffer.move_home()
        }
        (KeyModifiers::NONE, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
            doc.buffer.move_end()
        }
        (KeyModifiers::CONTROL, KeyCode::Left) => doc.buffer.move_word_left(),
        (KeyModifiers::CONTROL, KeyCode::Right) => doc.buffer.move_word_right(),
        _ => return,
    }

    on_content_changed(state, now);
    state.adjust_scroll();
}

/// Re-evaluate the trigger after the active block's content (or caret)
/// changed. The predicate is caret-relative, so caret motion alone can open
/// or close the menu too.
pub(super) fn on_content_changed(state: &mut AppState, now: Instant) {
    let width = state.editor_width;
    let scroll = state.scroll;

    let decision = match state.document.as_mut() {
        Some(doc) => {
            doc.commit_active();
            match (
                caret::caret_line_index(Some(doc)),
                commands::detect_trigger(&doc.buffer),
            ) {
                (Some(index), Some(_)) => {
                    Some((index, caret::anchor_position(doc, scroll, width)))
                }
                _ => None,
            }
        }
        // No caret to resolve: stay idle, mutate nothing
        None => None,
    };

    match decision {
        Some((index, anchor)) => menu::open(state, index, anchor, now),
        None => menu::close(state, now),
    }
}

/// Apply the selected command to the target block, then close the menu and
/// leave the caret right after the insertion.
fn confirm_command(state: &mut AppState, now: Instant) {
    let action = state
        .commands
        .get(state.menu.selected)
        .map(|c| c.action.clone());
    let target = state.menu.target_block;

    if let (Some(action), Some(target), Some(doc)) = (action, target, state.document.as_mut()) {
        if target < doc.blocks.len() {
            if doc.active != target {
                let col = doc.buffer.cursor;
                doc.set_active(target, col);
            }
            apply(&action, doc);
        }
    }

    menu::close(state, now);
    state.adjust_scroll();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_helpers::*;
    use crate::app::Screen;
    use crate::document::BlockKind;
    use crate::tree::FileNode;

    fn now() -> Instant {
        Instant::now()
    }

    // --- tree focus ---

    #[test]
    fn quit_sets_flag() {
        let mut state = test_state();
        let keys = test_keybindings();
        handle_key(&mut state, &key_event(KeyCode::Char('q')), &keys, now());
        assert!(state.should_quit);
    }

    #[test]
    fn selecting_note_opens_editor() {
        let mut state = test_state();
        let keys = test_keybindings();
        handle_key(&mut state, &key_event(KeyCode::Down), &keys, now());
        handle_key(&mut state, &key_event(KeyCode::Enter), &keys, now());
        assert!(matches!(state.screen, Screen::Editor { .. }));
        assert!(state.document.is_some());
        assert_eq!(state.focus, Focus::Editor);
    }

    #[test]
    fn selecting_code_file_has_no_document() {
        let mut state = test_state();
        state.open_file(FileNode::file("ui-mockup.js", "/p/ui-mockup.js"));
        assert!(state.document.is_none());
        assert_eq!(state.focus, Focus::Tree);
        assert_eq!(
            state.status_message.as_deref(),
            Some("ui-mockup.js is read-only")
        );
    }

    #[test]
    fn sidebar_width_clamps() {
        let mut state = test_state();
        let keys = test_keybindings();
        state.sidebar_width_percent = SIDEBAR_MIN_PERCENT;
        handle_key(&mut state, &key_event(KeyCode::Char('<')), &keys, now());
        assert_eq!(state.sidebar_width_percent, SIDEBAR_MIN_PERCENT);
        state.sidebar_width_percent = SIDEBAR_MAX_PERCENT;
        handle_key(&mut state, &key_event(KeyCode::Char('>')), &keys, now());
        assert_eq!(state.sidebar_width_percent, SIDEBAR_MAX_PERCENT);
    }

    #[test]
    fn toggle_sidebar() {
        let mut state = test_state();
        let keys = test_keybindings();
        let open = state.sidebar_open;
        handle_key(&mut state, &key_event(KeyCode::Char('b')), &keys, now());
        assert_eq!(state.sidebar_open, !open);
    }

    // --- editor focus: typing and trigger ---

    #[test]
    fn typing_updates_block() {
        let mut state = editor_state("ideas.note");
        type_char(&mut state, 'x');
        let doc = state.document.as_ref().unwrap();
        assert!(doc.blocks[0].text.ends_with('x'));
    }

    #[test]
    fn typing_slash_opens_menu() {
        let mut state = editor_state("ideas.note");
        type_char(&mut state, '/');
        assert!(state.menu.visible);
        assert_eq!(state.menu.target_block, Some(0));
        assert_eq!(state.menu.selected, 0);
    }

    #[test]
    fn trigger_idempotent_without_slash() {
        let mut state = editor_state("ideas.note");
        for ch in "no trigger here".chars() {
            type_char(&mut state, ch);
            assert!(!state.menu.visible);
            assert!(!state.menu.mounted);
        }
    }

    #[test]
    fn typing_past_slash_closes_menu() {
        let mut state = editor_state("ideas.note");
        type_char(&mut state, '/');
        assert!(state.menu.visible);
        type_char(&mut state, 'h');
        assert!(!state.menu.visible);
        assert!(state.menu.mounted); // grace window
    }

    #[test]
    fn backspace_to_slash_reopens_menu() {
        let mut state = editor_state("ideas.note");
        type_char(&mut state, '/');
        type_char(&mut state, 'h');
        let keys = test_keybindings();
        handle_key(&mut state, &key_event(KeyCode::Backspace), &keys, now());
        assert!(state.menu.visible);
    }

    #[test]
    fn caret_motion_away_from_slash_closes_menu() {
        let mut state = editor_state("ideas.note");
        type_char(&mut state, '/');
        let keys = test_keybindings();
        handle_key(&mut state, &key_event(KeyCode::Left), &keys, now());
        assert!(!state.menu.visible);
    }

    // --- editor focus: menu keys ---

    #[test]
    fn menu_arrows_do_not_move_caret() {
        let mut state = editor_state("ideas.note");
        type_char(&mut state, '/');
        let cursor = state.document.as_ref().unwrap().buffer.cursor;
        let keys = test_keybindings();
        handle_key(&mut state, &key_event(KeyCode::Down), &keys, now());
        handle_key(&mut state, &key_event(KeyCode::Up), &keys, now());
        assert_eq!(state.document.as_ref().unwrap().buffer.cursor, cursor);
        assert_eq!(state.document.as_ref().unwrap().blocks.len(), 1);
    }

    #[test]
    fn menu_enter_does_not_insert_newline() {
        let mut state = editor_state("ideas.note");
        type_char(&mut state, '/');
        let keys = test_keybindings();
        handle_key(&mut state, &key_event(KeyCode::Enter), &keys, now());
        assert_eq!(state.document.as_ref().unwrap().blocks.len(), 1);
    }

    #[test]
    fn menu_esc_cancels_without_mutation() {
        let mut state = editor_state("ideas.note");
        type_char(&mut state, '/');
        let text = state.document.as_ref().unwrap().blocks[0].text.clone();
        let keys = test_keybindings();
        handle_key(&mut state, &key_event(KeyCode::Esc), &keys, now());
        assert!(!state.menu.visible);
        assert_eq!(state.document.as_ref().unwrap().blocks[0].text, text);
        // esc was consumed by the menu: still in editor focus
        assert_eq!(state.focus, Focus::Editor);
    }

    #[test]
    fn confirm_applies_selected_command() {
        let mut state = editor_state("ideas.note");
        type_char(&mut state, '/');
        let keys = test_keybindings();
        handle_key(&mut state, &key_event(KeyCode::Down), &keys, now());
        assert_eq!(state.menu.selected, 1); // heading-2
        handle_key(&mut state, &key_event(KeyCode::Enter), &keys, now());
        let doc = state.document.as_ref().unwrap();
        assert_eq!(doc.blocks[0].kind, BlockKind::Heading2);
        assert!(doc.blocks[0].text.starts_with("## "));
        assert!(!state.menu.visible);
    }

    #[test]
    fn esc_without_menu_returns_to_tree() {
        let mut state = editor_state("ideas.note");
        let keys = test_keybindings();
        handle_key(&mut state, &key_event(KeyCode::Esc), &keys, now());
        assert_eq!(state.focus, Focus::Tree);
    }

    #[test]
    fn newline_splits_active_block() {
        let mut state = editor_state("ideas.note");
        let keys = test_keybindings();
        handle_key(&mut state, &key_event(KeyCode::Enter), &keys, now());
        assert_eq!(state.document.as_ref().unwrap().blocks.len(), 2);
    }

    #[test]
    fn help_closes_on_any_key() {
        let mut state = test_state();
        state.show_help = true;
        let keys = test_keybindings();
        handle_key(&mut state, &key_event(KeyCode::Char('x')), &keys, now());
        assert!(!state.show_help);
    }
}
