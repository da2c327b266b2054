use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::{NoteError, Result};

pub fn parse_key(input: &str) -> Result<KeyEvent> {
    let parts: Vec<&str> = input.split('+').collect();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = None;

    for (i, part) in parts.iter().enumerate() {
        let normalized = part.trim();
        match normalized.to_lowercase().as_str() {
            "ctrl" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => {
                if i == parts.len() - 1 {
                    key_part = Some(normalized);
                } else {
                    return Err(NoteError::Config(format!(
                        "Unknown modifier '{}' in key '{}'",
                        normalized, input
                    )));
                }
            }
        }
    }

    let key_str =
        key_part.ok_or_else(|| NoteError::Config(format!("No key code found in '{}'", input)))?;

    let code = parse_key_code(key_str)?;

    Ok(KeyEvent::new(code, modifiers))
}

fn parse_key_code(s: &str) -> Result<KeyCode> {
    match s.to_lowercase().as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "esc" | "escape" => Ok(KeyCode::Esc),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "bs" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "insert" | "ins" => Ok(KeyCode::Insert),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdn" => Ok(KeyCode::PageDown),
        "up" | "↑" => Ok(KeyCode::Up),
        "down" | "↓" => Ok(KeyCode::Down),
        "left" | "←" => Ok(KeyCode::Left),
        "right" | "→" => Ok(KeyCode::Right),
        "space" => Ok(KeyCode::Char(' ')),
        s if s.starts_with('f') && s.len() > 1 => {
            let num: u8 = s[1..]
                .parse()
                .map_err(|_| NoteError::Config(format!("Invalid function key: {}", s)))?;
            if !(1..=12).contains(&num) {
                return Err(NoteError::Config(format!(
                    "Function key out of range: F{}",
                    num
                )));
            }
            Ok(KeyCode::F(num))
        }
        s if s.chars().count() == 1 => {
            let ch = s.chars().next().unwrap();
            Ok(KeyCode::Char(ch))
        }
        _ => Err(NoteError::Config(format!("Unknown key: {}", s))),
    }
}
