//! mini-edit-buffer: the editing core of the mini-edit editor.
//!
//! This crate provides a line-oriented text buffer with cursor tracking and
//! dirty line reporting. Lines live in an arena-backed doubly-linked
//! [`LineStore`], which makes insertion and removal next to the cursor O(1)
//! at the cost of O(n) seek by line number, the right trade for an editing
//! cursor that moves one step at a time.
//!
//! # Overview
//!
//! The main type is [`TextBuffer`], which provides:
//! - Byte insertion and deletion at the cursor position
//! - Line splitting and merging (newline / backspace across lines)
//! - Cursor movement with clamping at buffer boundaries
//! - Handle-based line access for rendering
//!
//! # Example
//!
//! ```
//! use mini_edit_buffer::{DirtyLines, Position, TextBuffer};
//!
//! let mut buffer = TextBuffer::from_bytes(b"hello\nworld\n").unwrap();
//! assert_eq!(buffer.line_count(), 2);
//!
//! buffer.move_right();
//! let dirty = buffer.insert_char(b'!');
//! assert_eq!(buffer.line_content(0), "h!ello");
//! assert_eq!(dirty, DirtyLines::Single(0));
//! assert_eq!(buffer.cursor_position(), Position::new(0, 2));
//! ```
//!
//! # Dirty Line Tracking
//!
//! Each mutation returns a [`DirtyLines`] value indicating which lines were
//! affected, so downstream rendering can decide how much of the window to
//! erase:
//!
//! - `DirtyLines::None` - no visual change (boundary no-op)
//! - `DirtyLines::Single(line)` - only one line changed
//! - `DirtyLines::FromLineToEnd(line)` - all lines from `line` down changed
//!   (line split or merge)

mod line_store;
mod text_buffer;
mod types;

pub use line_store::{Line, LineId, LineStore, Lines};
pub use text_buffer::TextBuffer;
pub use types::{BufferError, DirtyLines, Position};
