use std::collections::HashMap;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{NoteError, Result};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_sidebar")]
    pub sidebar_default: bool,
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width_percent: u8,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            sidebar_default: default_sidebar(),
            sidebar_width_percent: default_sidebar_width(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EditorConfig {
    /// Delay before the command menu's entrance transition lands.
    #[serde(default = "default_open_delay")]
    pub menu_open_delay_ms: u64,
    /// How long a closed menu stays mounted for its exit transition.
    #[serde(default = "default_close_grace")]
    pub menu_close_grace_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            menu_open_delay_ms: default_open_delay(),
            menu_close_grace_ms: default_close_grace(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct KeybindingsConfig {
    #[serde(default = "default_preset")]
    pub preset: String,
    #[serde(default)]
    pub bindings: HashMap<String, String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            bindings: HashMap::new(),
        }
    }
}

fn default_theme() -> String {
    "dark".into()
}

fn default_sidebar() -> bool {
    true
}

fn default_sidebar_width() -> u8 {
    30
}

fn default_open_delay() -> u64 {
    30
}

fn default_close_grace() -> u64 {
    200
}

fn default_preset() -> String {
    "vim".into()
}

impl AppConfig {
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        let config: AppConfig = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("NOTE_").split("_").lowercase(false))
            .extract()
            .map_err(|e| NoteError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(15..=60).contains(&self.ui.sidebar_width_percent) {
            return Err(NoteError::Config(
                "ui.sidebar_width_percent must be between 15 and 60".into(),
            ));
        }
        if self.editor.menu_close_grace_ms > 2_000 {
            return Err(NoteError::Config(
                "editor.menu_close_grace_ms must be at most 2000".into(),
            ));
        }
        Ok(())
    }

    pub fn config_dir() -> Option<PathBuf> {
        std::env::var("XDG_CONFIG_HOME")
            .ok()
            .map(|xdg| PathBuf::from(xdg).join("note-tui"))
            .or_else(|| {
                directories::BaseDirs::new()
                    .map(|dirs| dirs.home_dir().join(".config").join("note-tui"))
            })
    }

    pub fn write_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = r#"[ui]
theme = "dark"
sidebar_default = true
sidebar_width_percent = 30

[editor]
menu_open_delay_ms = 30
menu_close_grace_ms = 200

[keybindings]
preset = "vim"  # vim | emacs | vscode

# Override specific keys:
# [keybindings.bindings]
# quit = "Ctrl+q"
# toggle_sidebar = "F2"
"#;

        std::fs::write(path, content)?;
        Ok(())
    }
}
