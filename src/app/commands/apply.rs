use crate::caret;
use crate::document::{Block, Document};
use crate::edit_buffer::EditBuffer;

use super::types::CommandAction;

/// Apply a command's transform to the document's active block.
///
/// The block's content from line start up to the caret (which includes the
/// typed '/') is replaced by the insertion text; the text after the caret is
/// preserved and reflows after it. The caret lands immediately after the
/// inserted text and the block's kind is re-derived.
pub fn apply(action: &CommandAction, doc: &mut Document) {
    match action {
        CommandAction::Insert(text) => {
            let cursor = doc.buffer.cursor;
            doc.buffer.replace_range(0, cursor, text);
            doc.commit_active();
        }
        CommandAction::InsertBlocks(lines) => {
            let (_, suffix) = doc.buffer.split_at_cursor();
            let last = lines.len() - 1;

            for (i, line) in lines.iter().enumerate() {
                let text = if i == last {
                    format!("{}{}", line, suffix)
                } else {
                    (*line).to_string()
                };
                if i == 0 {
                    doc.blocks[doc.active] = Block::new(text);
                } else {
                    doc.blocks.insert(doc.active + i, Block::new(text));
                }
            }

            doc.active += last;
            doc.buffer = EditBuffer::new(&doc.blocks[doc.active].text);
            caret::set_caret_offset(&mut doc.buffer, lines[last].chars().count());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::BlockKind;

    fn doc_with(text: &str, cursor: usize) -> Document {
        let mut doc = Document::open("test.note");
        doc.buffer = EditBuffer::new(text);
        doc.buffer.cursor = cursor;
        doc.commit_active();
        doc
    }

    #[test]
    fn insert_preserves_suffix() {
        // caret just after the '/': "hel/" is replaced, "lo world" reflows
        let mut doc = doc_with("hel/lo world", 4);
        apply(&CommandAction::Insert("# "), &mut doc);
        assert_eq!(doc.blocks[0].text, "# lo world");
        assert_eq!(doc.buffer.cursor, 2);
    }

    #[test]
    fn insert_rederives_kind() {
        let mut doc = doc_with("title/", 6);
        apply(&CommandAction::Insert("## "), &mut doc);
        assert_eq!(doc.blocks[0].kind, BlockKind::Heading2);
        assert_eq!(doc.blocks[0].text, "## ");
    }

    #[test]
    fn insert_rule_replaces_whole_prefix() {
        let mut doc = doc_with("some text /", 11);
        apply(&CommandAction::Insert("---"), &mut doc);
        assert_eq!(doc.blocks[0].text, "---");
        assert_eq!(doc.buffer.cursor, 3);
    }

    #[test]
    fn insert_link_placeholder() {
        let mut doc = doc_with("/", 1);
        apply(&CommandAction::Insert("[title](url)"), &mut doc);
        assert_eq!(doc.blocks[0].text, "[title](url)");
        assert_eq!(doc.buffer.cursor, 12);
    }

    #[test]
    fn insert_blocks_spans_lines() {
        let mut doc = doc_with("note /tail", 6);
        apply(
            &CommandAction::InsertBlocks(&["› Toggle", "  "]),
            &mut doc,
        );
        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(doc.blocks[0].text, "› Toggle");
        assert_eq!(doc.blocks[1].text, "  tail");
        assert_eq!(doc.active, 1);
        assert_eq!(doc.buffer.cursor, 2); // after the indent, before the suffix
    }

    #[test]
    fn insert_blocks_single_line_keeps_suffix() {
        let mut doc = doc_with("/rest", 1);
        apply(&CommandAction::InsertBlocks(&["- "]), &mut doc);
        assert_eq!(doc.blocks.len(), 1);
        assert_eq!(doc.blocks[0].text, "- rest");
        assert_eq!(doc.buffer.cursor, 2);
    }

    #[test]
    fn insert_with_empty_suffix() {
        let mut doc = doc_with("/", 1);
        apply(&CommandAction::Insert("### "), &mut doc);
        assert_eq!(doc.blocks[0].text, "### ");
        assert_eq!(doc.blocks[0].kind, BlockKind::Heading3);
        assert_eq!(doc.buffer.cursor, 4);
    }
}
