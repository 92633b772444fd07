//! TextInput: single-line branch name buffer with Unicode-aware cursor

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Longest branch name the editor accepts
pub const DEFAULT_CHAR_LIMIT: usize = 64;

/// A cursor-aware, length-limited text buffer.
///
/// The cursor is a char index, not a byte index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    cursor: usize,
    char_limit: usize,
}

impl Default for TextInput {
    fn default() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            char_limit: DEFAULT_CHAR_LIMIT,
        }
    }
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Display width of text before cursor (for terminal cursor positioning)
    pub fn cursor_display_offset(&self) -> usize {
        let before: String = self.buffer.chars().take(self.cursor).collect();
        UnicodeWidthStr::width(before.as_str())
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Insert at the cursor. Returns false once the char limit is reached.
    pub fn insert(&mut self, c: char) -> bool {
        if self.buffer.chars().count() >= self.char_limit {
            return false;
        }
        let byte_idx = self.byte_index(self.cursor);
        self.buffer.insert(byte_idx, c);
        self.cursor += 1;
        true
    }

    /// Delete character before cursor (Backspace)
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
        true
    }

    /// Delete character at cursor (Delete key)
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.buffer.chars().count() {
            return false;
        }
        self.remove_at_cursor();
        true
    }

    /// Delete the word before the cursor, along with separators after it (Ctrl+W)
    pub fn delete_word_before(&mut self) -> bool {
        let chars: Vec<char> = self.buffer.chars().collect();
        let mut start = self.cursor;
        while start > 0 && !chars[start - 1].is_alphanumeric() {
            start -= 1;
        }
        while start > 0 && chars[start - 1].is_alphanumeric() {
            start -= 1;
        }
        if start == self.cursor {
            return false;
        }
        let from = self.byte_index(start);
        let to = self.byte_index(self.cursor);
        self.buffer.drain(from..to);
        self.cursor = start;
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.buffer.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn trim(&self) -> &str {
        self.buffer.trim()
    }

    fn remove_at_cursor(&mut self) {
        let byte_idx = self.byte_index(self.cursor);
        if let Some(c) = self.buffer[byte_idx..].chars().next() {
            self.buffer.drain(byte_idx..byte_idx + c.len_utf8());
        }
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }
}

/// Result of text input handling
#[derive(Debug, PartialEq, Eq)]
pub enum TextInputResult {
    /// Esc
    Cancel,
    /// Enter
    Submit,
    /// Buffer or cursor updated
    Handled,
    /// Key means nothing to a text field
    Unhandled,
}

/// Apply an editing key to `input`.
///
/// Esc and Enter are reported, never applied.
pub fn handle_text_input(key: &KeyEvent, input: &mut TextInput) -> TextInputResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('u') => {
                input.clear();
                TextInputResult::Handled
            }
            KeyCode::Char('w') | KeyCode::Backspace => {
                input.delete_word_before();
                TextInputResult::Handled
            }
            _ => TextInputResult::Unhandled,
        };
    }

    match key.code {
        KeyCode::Esc => TextInputResult::Cancel,
        KeyCode::Enter => TextInputResult::Submit,
        KeyCode::Backspace => {
            input.backspace();
            TextInputResult::Handled
        }
        KeyCode::Delete => {
            input.delete();
            TextInputResult::Handled
        }
        KeyCode::Left => {
            input.move_left();
            TextInputResult::Handled
        }
        KeyCode::Right => {
            input.move_right();
            TextInputResult::Handled
        }
        KeyCode::Home => {
            input.move_home();
            TextInputResult::Handled
        }
        KeyCode::End => {
            input.move_end();
            TextInputResult::Handled
        }
        KeyCode::Char(c) => {
            input.insert(c);
            TextInputResult::Handled
        }
        _ => TextInputResult::Unhandled,
    }
}
