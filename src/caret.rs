//! Caret tracking for the block editor.
//!
//! The cursor lives in the active block's [`EditBuffer`]; replacing a block
//! wholesale destroys it, so callers save the offset before a structural
//! mutation and restore it afterwards through this module. The tracker also
//! measures the caret's cell position inside the editor pane so the command
//! menu can be anchored next to it.

use crate::document::Document;
use crate::edit_buffer::EditBuffer;

/// Character offset of the caret within the active block.
pub fn caret_offset(buffer: &EditBuffer) -> usize {
    buffer.cursor
}

/// Restore the caret to `offset`, clamping to the text length. Clamping is
/// deliberate: an offset saved before a shrinking edit must land at the end,
/// not fail.
pub fn set_caret_offset(buffer: &mut EditBuffer, offset: usize) {
    buffer.cursor = offset.min(buffer.chars.len());
}

/// Index of the block holding the caret, or `None` when no document is open.
pub fn caret_line_index(document: Option<&Document>) -> Option<usize> {
    let doc = document?;
    if doc.active < doc.blocks.len() {
        Some(doc.active)
    } else {
        None
    }
}

/// Cell coordinates of the caret relative to the editor pane origin.
///
/// Blocks render one below the other and wrap at `width` columns; the row is
/// the sum of rendered rows above the caret minus the pane's scroll offset.
/// Pure measurement: the document is not touched.
pub fn anchor_position(doc: &Document, scroll: usize, width: u16) -> (u16, u16) {
    if width == 0 {
        return (0, 0);
    }
    let width = width as usize;

    let mut row = 0usize;
    for block in doc.blocks.iter().take(doc.active) {
        row += rendered_rows(block.text.chars().count(), width);
    }
    row += doc.buffer.cursor / width;
    let col = doc.buffer.cursor % width;

    let row = row.saturating_sub(scroll);
    (col as u16, row as u16)
}

/// Rows a block occupies when wrapped at `width` columns; empty blocks still
/// take one row.
pub fn rendered_rows(char_count: usize, width: usize) -> usize {
    if width == 0 || char_count == 0 {
        1
    } else {
        char_count.div_ceil(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_round_trip() {
        let mut buf = EditBuffer::new("some block text");
        for offset in 0..=buf.chars.len() {
            set_caret_offset(&mut buf, offset);
            assert_eq!(caret_offset(&buf), offset);
        }
    }

    #[test]
    fn set_caret_offset_clamps_past_end() {
        let mut buf = EditBuffer::new("abc");
        set_caret_offset(&mut buf, 99);
        assert_eq!(buf.cursor, 3);
    }

    #[test]
    fn line_index_none_without_document() {
        assert_eq!(caret_line_index(None), None);
    }

    #[test]
    fn line_index_follows_active_block() {
        let mut doc = Document::open("a.note");
        doc.insert_newline();
        assert_eq!(caret_line_index(Some(&doc)), Some(1));
    }

    #[test]
    fn anchor_on_first_block() {
        let mut doc = Document::open("a.note");
        doc.buffer.cursor = 7;
        assert_eq!(anchor_position(&doc, 0, 80), (7, 0));
    }

    #[test]
    fn anchor_counts_rows_above() {
        let mut doc = Document::open("a.note");
        doc.insert_newline();
        doc.buffer = EditBuffer::new("second");
        doc.buffer.cursor = 3;
        // seed block occupies one row at width 80
        assert_eq!(anchor_position(&doc, 0, 80), (3, 1));
    }

    #[test]
    fn anchor_wraps_long_blocks() {
        let mut doc = Document::open("a.note");
        doc.buffer = EditBuffer::new(&"x".repeat(25));
        doc.buffer.cursor = 23;
        // width 10: cursor sits on the third wrapped row
        assert_eq!(anchor_position(&doc, 0, 10), (3, 2));
    }

    #[test]
    fn anchor_subtracts_scroll() {
        let mut doc = Document::open("a.note");
        doc.insert_newline();
        doc.insert_newline();
        assert_eq!(anchor_position(&doc, 2, 80).1, 0);
    }

    #[test]
    fn anchor_zero_width_is_origin() {
        let doc = Document::open("a.note");
        assert_eq!(anchor_position(&doc, 0, 0), (0, 0));
    }

    #[test]
    fn rendered_rows_minimum_one() {
        assert_eq!(rendered_rows(0, 10), 1);
        assert_eq!(rendered_rows(10, 10), 1);
        assert_eq!(rendered_rows(11, 10), 2);
    }
}
