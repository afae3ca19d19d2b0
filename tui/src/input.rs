//! Line editing for text fields.
//!
//! Provides an `InputLine` struct that manages a text buffer with cursor
//! movement and editing operations. Every text field in the UI — the five
//! form fields and the search bar — is backed by one.

/// A line editor with cursor movement.
///
/// The buffer is maintained as a `Vec<char>` so that cursor-based
/// operations work correctly with multi-byte characters.
#[derive(Debug, Clone, Default)]
pub struct InputLine {
    buffer: Vec<char>,
    cursor: usize,
}


impl InputLine {
    /// Create a new empty input line.
    pub fn new() -> Self {
        InputLine::default()
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.buffer.remove(self.cursor);
        }
    }

    /// Delete the character at the cursor position (forward delete).
    pub fn delete_forward(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    /// Delete the word before the cursor (Ctrl-W).
    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let end = self.cursor;
        // Skip whitespace/punctuation
        while self.cursor > 0 && !self.buffer[self.cursor - 1].is_alphanumeric() {
            self.cursor -= 1;
        }
        // Skip word characters
        while self.cursor > 0 && self.buffer[self.cursor - 1].is_alphanumeric() {
            self.cursor -= 1;
        }
        self.buffer.drain(self.cursor..end);
    }

    /// Move the cursor one position to the left.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the cursor one position to the right.
    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the beginning of the line.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end of the line.
    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Clear the entire buffer and reset the cursor.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Return the current buffer contents as a String.
    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Return the current cursor position (character index).
    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    /// Return whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
