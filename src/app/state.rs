use std::time::Duration;

use chrono::Local;

use crate::config::AppConfig;
use crate::document::Document;
use crate::sched::{Scheduler, TimerHandle};
use crate::tree::{initial_tree, FileNode, FileTree};

use super::commands::{all_commands, Command};

/// What the main pane is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Welcome,
    Editor { file: FileNode },
}

/// Which pane receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tree,
    Editor,
}

/// Transient command menu state, owned by the editor orchestrator.
///
/// `mounted` stays true while `visible` is true and for the bounded exit
/// grace window afterwards, so the popup can animate out. The two timer
/// handles identify the pending entrance/exit callbacks; a fired handle
/// that no longer matches is stale and ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    pub visible: bool,
    pub mounted: bool,
    pub entered: bool,
    pub target_block: Option<usize>,
    pub selected: usize,
    pub anchor: (u16, u16),
    pub entrance_timer: Option<TimerHandle>,
    pub exit_timer: Option<TimerHandle>,
}

impl MenuState {
    pub fn idle() -> Self {
        Self {
            visible: false,
            mounted: false,
            entered: false,
            target_block: None,
            selected: 0,
            anchor: (0, 0),
            entrance_timer: None,
            exit_timer: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    Key(crossterm::event::KeyEvent),
    Tick,
}

pub struct AppState {
    pub screen: Screen,
    pub focus: Focus,
    pub tree: FileTree,
    pub document: Option<Document>,
    pub sidebar_open: bool,
    pub sidebar_width_percent: u8,
    pub menu: MenuState,
    pub commands: Vec<Command>,
    pub scheduler: Scheduler,
    pub scroll: usize,
    pub editor_width: u16,
    pub editor_height: u16,
    pub menu_open_delay: Duration,
    pub menu_close_grace: Duration,
    pub date_display: String,
    pub hints: Vec<(String, &'static str)>,
    pub status_message: Option<String>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: &AppConfig, hints: Vec<(String, &'static str)>) -> Self {
        Self {
            screen: Screen::Welcome,
            focus: Focus::Tree,
            tree: FileTree::new(initial_tree()),
            document: None,
            sidebar_open: config.ui.sidebar_default,
            sidebar_width_percent: config.ui.sidebar_width_percent,
            menu: MenuState::idle(),
            commands: all_commands(),
            scheduler: Scheduler::new(),
            scroll: 0,
            editor_width: 80,
            editor_height: 24,
            menu_open_delay: Duration::from_millis(config.editor.menu_open_delay_ms),
            menu_close_grace: Duration::from_millis(config.editor.menu_close_grace_ms),
            date_display: Local::now().format("%b %d, %Y").to_string(),
            hints,
            status_message: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// Open a file from the tree. Note files get a fresh seeded document;
    /// anything else shows the read-only preview. Either way this is a hard
    /// reset: the old document is gone and the menu unmounts with no grace
    /// period.
    pub fn open_file(&mut self, file: FileNode) {
        super::menu::hard_reset(self);
        self.scroll = 0;
        if file.is_note() {
            self.document = Some(Document::open(&file.name));
            self.focus = Focus::Editor;
            self.status_message = None;
        } else {
            self.document = None;
            self.focus = Focus::Tree;
            self.status_message = Some(format!("{} is read-only", file.name));
        }
        self.screen = Screen::Editor { file };
    }

    /// Keep the caret row inside the editor viewport.
    pub fn adjust_scroll(&mut self) {
        let Some(doc) = self.document.as_ref() else {
            return;
        };
        let (_, row) = crate::caret::anchor_position(doc, 0, self.editor_width);
        let row = row as usize;
        let height = self.editor_height.max(1) as usize;
        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll + height {
            self.scroll = row + 1 - height;
        }
    }

    /// Back to the welcome screen, dropping any open document.
    pub fn go_home(&mut self) {
        super::menu::hard_reset(self);
        self.document = None;
        self.screen = Screen::Welcome;
        self.focus = Focus::Tree;
        self.scroll = 0;
        self.status_message = None;
    }
}
