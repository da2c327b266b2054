/// Character-level edit buffer for the active block.
///
/// Holds the text as a `Vec<char>` so the cursor is always a char offset,
/// never a byte offset. One buffer edits exactly one block at a time; the
/// document commits it back after every change.
#[derive(Debug, Clone, PartialEq)]
pub struct EditBuffer {
    pub chars: Vec<char>,
    pub cursor: usize,
}

impl EditBuffer {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    pub fn new_empty() -> Self {
        Self {
            chars: Vec::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }

    pub fn move_word_left(&mut self) {
        while self.cursor > 0 && self.chars[self.cursor - 1].is_whitespace() {
            self.cursor -= 1;
        }
        while self.cursor > 0 && !self.chars[self.cursor - 1].is_whitespace() {
            self.cursor -= 1;
        }
    }

    pub fn move_word_right(&mut self) {
        let len = self.chars.len();
        while self.cursor < len && !self.chars[self.cursor].is_whitespace() {
            self.cursor += 1;
        }
        while self.cursor < len && self.chars[self.cursor].is_whitespace() {
            self.cursor += 1;
        }
    }

    /// Replace `[start, end)` with `replacement`, leaving the cursor right
    /// after the inserted text.
    pub fn replace_range(&mut self, start: usize, end: usize, replacement: &str) {
        let new_chars: Vec<char> = replacement.chars().collect();
        let new_len = new_chars.len();
        self.chars.splice(start..end, new_chars);
        self.cursor = start + new_len;
    }

    pub fn split_at_cursor(&self) -> (String, String) {
        let before: String = self.chars[..self.cursor].iter().collect();
        let after: String = self.chars[self.cursor..].iter().collect();
        (before, after)
    }

    #[allow(clippy::inherent_to_string)]
    pub fn to_string(&self) -> String {
        self.chars.iter().collect()
    }
}
