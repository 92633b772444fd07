//! Cursor navigation over a list of entries
//!
//! `VirtualList` carries the cursor movement rules; `SelectList` is the
//! concrete list the worktree and branch views keep their entries in.

use crossterm::event::{KeyCode, KeyEvent};

/// Rows moved by PageUp/PageDown
pub const PAGE_SIZE: usize = 10;

/// Cursor movement over a variable-length list.
///
/// Up and down wrap around; every other motion clamps.
pub trait VirtualList {
    fn virtual_len(&self) -> usize;

    fn cursor(&self) -> usize;

    fn set_cursor(&mut self, pos: usize);

    /// Move up one row, wrapping to the bottom. False on an empty list.
    fn move_up(&mut self) -> bool {
        let len = self.virtual_len();
        if len == 0 {
            return false;
        }
        let current = self.cursor();
        self.set_cursor(if current == 0 { len - 1 } else { current - 1 });
        true
    }

    /// Move down one row, wrapping to the top. False on an empty list.
    fn move_down(&mut self) -> bool {
        let len = self.virtual_len();
        if len == 0 {
            return false;
        }
        let current = self.cursor();
        self.set_cursor(if current + 1 >= len { 0 } else { current + 1 });
        true
    }

    fn goto_top(&mut self) {
        self.set_cursor(0);
    }

    fn goto_bottom(&mut self) {
        self.set_cursor(self.virtual_len().saturating_sub(1));
    }

    fn page_up(&mut self, lines: usize) {
        self.set_cursor(self.cursor().saturating_sub(lines));
    }

    fn page_down(&mut self, lines: usize) {
        let max = self.virtual_len().saturating_sub(1);
        self.set_cursor((self.cursor() + lines).min(max));
    }

    /// Apply a navigation key. Returns false when `key` is not a motion.
    fn navigate(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_down();
            }
            KeyCode::Home | KeyCode::Char('g') => self.goto_top(),
            KeyCode::End | KeyCode::Char('G') => self.goto_bottom(),
            KeyCode::PageUp => self.page_up(PAGE_SIZE),
            KeyCode::PageDown => self.page_down(PAGE_SIZE),
            _ => return false,
        }
        true
    }
}

/// Ordered entries plus a cursor that always points inside them (or at 0 when empty)
#[derive(Debug, Clone, PartialEq)]
pub struct SelectList<T> {
    items: Vec<T>,
    cursor: usize,
}

impl<T> Default for SelectList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
        }
    }
}

impl<T> SelectList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, cursor: 0 }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn selected(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    pub fn select(&mut self, index: usize) {
        self.set_cursor(index);
    }

    /// Replace the entries, keeping the cursor index where it still fits
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.clamp();
    }

    /// Remove the entry at `index`, returning it
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.clamp();
        Some(removed)
    }

    fn clamp(&mut self) {
        self.cursor = self.cursor.min(self.items.len().saturating_sub(1));
    }
}

impl<T> VirtualList for SelectList<T> {
    fn virtual_len(&self) -> usize {
        self.items.len()
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.items.len().saturating_sub(1));
    }
}
