use crate::edit_buffer::EditBuffer;

/// Structural role of a block, derived from its leading markdown prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
}

impl BlockKind {
    /// A block's kind follows its text. `# `, `## ` and `### ` prefixes mark
    /// headings; everything else is a paragraph.
    pub fn derive(text: &str) -> Self {
        if text.starts_with("### ") {
            Self::Heading3
        } else if text.starts_with("## ") {
            Self::Heading2
        } else if text.starts_with("# ") {
            Self::Heading1
        } else {
            Self::Paragraph
        }
    }
}

/// One editable line of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub text: String,
    pub kind: BlockKind,
}

impl Block {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = BlockKind::derive(&text);
        Self { text, kind }
    }
}

/// Ordered block sequence plus the live cursor.
///
/// The active block's text is mirrored in `buffer`; every mutation goes
/// through the buffer and is committed back with [`Document::commit_active`].
/// Blocks other than the active one are only ever replaced wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub blocks: Vec<Block>,
    pub active: usize,
    pub buffer: EditBuffer,
}

impl Document {
    /// Seed a fresh document for a newly opened note file.
    pub fn open(file_name: &str) -> Self {
        let seed = format!("This is the content for {}.", file_name);
        let buffer = EditBuffer::new(&seed);
        Self {
            blocks: vec![Block::new(seed)],
            active: 0,
            buffer,
        }
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Write the buffer back into the active block, re-deriving its kind.
    pub fn commit_active(&mut self) {
        let text = self.buffer.to_string();
        self.blocks[self.active] = Block::new(text);
    }

    /// Switch the active block, committing the old one first. The cursor is
    /// restored at `col`, clamped to the new block's length.
    pub fn set_active(&mut self, index: usize, col: usize) {
        if index >= self.blocks.len() {
            return;
        }
        self.commit_active();
        self.active = index;
        self.buffer = EditBuffer::new(&self.blocks[index].text);
        crate::caret::set_caret_offset(&mut self.buffer, col);
    }

    /// Split the active block at the cursor. The new block owns the suffix
    /// and derives its kind from its own text, so a heading never propagates
    /// to the line created below it.
    pub fn insert_newline(&mut self) {
        let (before, after) = self.buffer.split_at_cursor();
        self.blocks[self.active] = Block::new(before);
        self.blocks.insert(self.active + 1, Block::new(after));
        self.active += 1;
        self.buffer = EditBuffer::new(&self.blocks[self.active].text);
        self.buffer.move_home();
    }

    /// Backspace at column zero: merge the active block into the previous
    /// one, cursor landing at the join point. No-op on the first block.
    pub fn merge_with_previous(&mut self) {
        if self.active == 0 {
            return;
        }
        let removed = self.blocks.remove(self.active);
        self.active -= 1;
        let join = self.blocks[self.active].text.chars().count();
        let merged = format!("{}{}", self.blocks[self.active].text, removed.text);
        self.blocks[self.active] = Block::new(merged);
        self.buffer = EditBuffer::new(&self.blocks[self.active].text);
        crate::caret::set_caret_offset(&mut self.buffer, join);
    }

    /// Move the cursor to the block above, keeping the column clamped.
    pub fn move_up(&mut self) {
        if self.active == 0 {
            self.buffer.move_home();
            return;
        }
        let col = self.buffer.cursor;
        self.set_active(self.active - 1, col);
    }

    /// Move the cursor to the block below, keeping the column clamped.
    pub fn move_down(&mut self) {
        if self.active + 1 >= self.blocks.len() {
            self.buffer.move_end();
            return;
        }
        let col = self.buffer.cursor;
        self.set_active(self.active + 1, col);
    }
}
