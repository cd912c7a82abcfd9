//! TextBuffer is the main public API for text editing operations.
//!
//! It pairs a [`LineStore`] with a cursor tracked as (row, column) plus a
//! cached handle to the current line, and keeps the two consistent across
//! every mutation: any operation that changes the cursor row or removes the
//! line it points at updates the handle in the same step.
//!
//! Each mutation returns [`DirtyLines`] describing which lines changed, so
//! the render pass can decide how much of the window to erase.

use crate::line_store::{LineId, LineStore};
use crate::types::{BufferError, DirtyLines, Position};

#[derive(Debug)]
struct Cursor {
    row: usize,
    col: usize,
    /// Cached handle to the line at `row`. Re-derived on every structural
    /// change that could invalidate it.
    line: LineId,
}

/// A text buffer with cursor tracking and dirty line reporting.
#[derive(Debug)]
pub struct TextBuffer {
    store: LineStore,
    cursor: Cursor,
}

impl TextBuffer {
    /// Creates an empty buffer: one empty line, cursor at the origin.
    pub fn new() -> Self {
        let store = LineStore::new();
        let line = store.first();
        Self {
            store,
            cursor: Cursor { row: 0, col: 0, line },
        }
    }

    /// Creates a buffer from raw file bytes. See [`LineStore::from_bytes`]
    /// for the splitting rules.
    pub fn from_bytes(raw: &[u8]) -> Result<Self, BufferError> {
        let store = LineStore::from_bytes(raw)?;
        let line = store.first();
        Ok(Self {
            store,
            cursor: Cursor { row: 0, col: 0, line },
        })
    }

    // ==================== Accessors ====================

    /// Returns the current cursor position.
    pub fn cursor_position(&self) -> Position {
        Position::new(self.cursor.row, self.cursor.col)
    }

    /// Handle to the line the cursor is on.
    pub fn cursor_line_id(&self) -> LineId {
        self.cursor.line
    }

    /// Read access to the underlying line store.
    pub fn store(&self) -> &LineStore {
        &self.store
    }

    /// Returns the number of lines in the buffer. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.store.line_count()
    }

    /// Length in bytes of the line the cursor is on.
    pub fn current_line_len(&self) -> usize {
        self.store.line(self.cursor.line).len()
    }

    /// Returns the content of the line at `row` as a String.
    ///
    /// O(row) seek; intended for tests and cold paths. Returns an empty
    /// string if `row` is out of bounds.
    pub fn line_content(&self, row: usize) -> String {
        match self.store.line_id_at(row) {
            Some(id) => String::from_utf8_lossy(self.store.line(id).as_bytes()).into_owned(),
            None => String::new(),
        }
    }

    /// Returns the entire buffer content, lines joined by `\n`.
    pub fn content(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.store.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&String::from_utf8_lossy(line.as_bytes()));
        }
        out
    }

    // ==================== Cursor Movement ====================

    /// Moves the cursor left by one character.
    ///
    /// At the beginning of a line, moves to the end of the previous line.
    /// At the beginning of the buffer, does nothing.
    pub fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if let Some(prev) = self.store.prev(self.cursor.line) {
            self.cursor.row -= 1;
            self.cursor.line = prev;
            self.cursor.col = self.store.line(prev).len();
        }
    }

    /// Moves the cursor right by one character.
    ///
    /// At the end of a line, moves to the beginning of the next line.
    /// At the end of the buffer, does nothing.
    pub fn move_right(&mut self) {
        if self.cursor.col < self.current_line_len() {
            self.cursor.col += 1;
        } else if let Some(next) = self.store.next(self.cursor.line) {
            self.cursor.row += 1;
            self.cursor.line = next;
            self.cursor.col = 0;
        }
    }

    /// Moves the cursor up by one line, clamping the column to the target
    /// line's length. At the first line, does nothing.
    pub fn move_up(&mut self) {
        if let Some(prev) = self.store.prev(self.cursor.line) {
            self.cursor.row -= 1;
            self.cursor.line = prev;
            self.cursor.col = self.cursor.col.min(self.store.line(prev).len());
        }
    }

    /// Moves the cursor down by one line, clamping the column to the target
    /// line's length. At the last line, does nothing.
    pub fn move_down(&mut self) {
        if let Some(next) = self.store.next(self.cursor.line) {
            self.cursor.row += 1;
            self.cursor.line = next;
            self.cursor.col = self.cursor.col.min(self.store.line(next).len());
        }
    }

    // ==================== Mutations ====================

    /// Inserts a byte at the cursor position. `b'\n'` splits the line.
    pub fn insert_char(&mut self, byte: u8) -> DirtyLines {
        if byte == b'\n' {
            return self.insert_newline();
        }

        self.store.line_mut(self.cursor.line).insert(self.cursor.col, byte);
        self.cursor.col += 1;
        DirtyLines::Single(self.cursor.row)
    }

    /// Splits the current line at the cursor column.
    ///
    /// The left line keeps `[0, col)`, the new right line gets the tail and
    /// becomes the current line; the cursor moves to the start of it.
    /// Splitting at the end of the line produces an empty right line.
    pub fn insert_newline(&mut self) -> DirtyLines {
        let cur = self.cursor.line;
        let col = self.cursor.col;
        let tail_len = self.store.line(cur).len() - col;

        let new = self.store.insert_after(cur, tail_len + 1);
        if tail_len > 0 {
            let tail = self.store.line(cur).as_bytes()[col..].to_vec();
            self.store.line_mut(new).append(&tail);
            self.store.line_mut(cur).truncate(col);
        }

        let dirty_from = self.cursor.row;
        self.cursor.row += 1;
        self.cursor.col = 0;
        self.cursor.line = new;
        DirtyLines::FromLineToEnd(dirty_from)
    }

    /// Deletes the character before the cursor (Backspace).
    ///
    /// At the beginning of a line, merges the current line onto the end of
    /// the previous one; the cursor lands where the previous line used to
    /// end. At the beginning of the buffer, does nothing.
    pub fn delete_backward(&mut self) -> DirtyLines {
        if self.cursor.col == 0 {
            let Some(prev) = self.store.prev(self.cursor.line) else {
                return DirtyLines::None;
            };

            let prev_len = self.store.line(prev).len();
            self.store.concat(prev, self.cursor.line);
            let removed = self.cursor.line;
            // Relocate the cursor before the handle goes stale.
            self.cursor.row -= 1;
            self.cursor.col = prev_len;
            self.cursor.line = prev;
            self.store.remove(removed);
            DirtyLines::FromLineToEnd(self.cursor.row)
        } else {
            self.store.line_mut(self.cursor.line).remove(self.cursor.col - 1);
            self.cursor.col -= 1;
            DirtyLines::Single(self.cursor.row)
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
