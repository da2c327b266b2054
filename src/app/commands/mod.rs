pub mod apply;
mod types;

mod bullet;
mod heading1;
mod heading2;
mod heading3;
mod line;
mod reference;
mod toggle;

pub use types::*;

use crate::edit_buffer::EditBuffer;

/// The command registry: ordered, static, ids unique. Index order is the
/// menu's display and navigation order.
pub fn all_commands() -> Vec<Command> {
    vec![
        heading1::CMD,
        heading2::CMD,
        heading3::CMD,
        toggle::CMD,
        bullet::CMD,
        reference::CMD,
        line::CMD,
    ]
}

/// Detects whether the menu should be open for the current buffer state.
/// Returns `Some(slash_pos)` when the character immediately before the caret
/// is '/'.
///
/// The contract is ends-with-trigger-at-caret: a '/' anywhere else in the
/// line never opens the menu, and typing past the '/' closes it.
pub fn detect_trigger(buffer: &EditBuffer) -> Option<usize> {
    let c = buffer.cursor;
    if c == 0 {
        return None;
    }
    if buffer.chars[c - 1] == '/' {
        Some(c - 1)
    } else {
        None
    }
}
