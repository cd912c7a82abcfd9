//! The single-buffer editor backend.
//!
//! Owns one [`TextBuffer`] backed by one file, plus the viewport onto it and
//! the cursor visibility flag. Event handling is pure dispatch: every arm
//! maps to exactly one buffer, viewport, or persistence operation. No
//! editing logic lives here.

use std::path::{Path, PathBuf};

use mini_edit_buffer::{DirtyLines, TextBuffer};
use mini_edit_input::EditorEvent;

use crate::error::EditorError;
use crate::pane::EditorPane;
use crate::persistence;
use crate::render::Frame;
use crate::viewport::Viewport;

/// An editor session over a single file-backed buffer.
#[derive(Debug)]
pub struct SingleBufferEditor {
    buffer: TextBuffer,
    viewport: Viewport,
    path: PathBuf,
    show_cursor: bool,
    /// Lines dirtied since the last render, merged across events.
    pending: DirtyLines,
}

impl SingleBufferEditor {
    /// Loads `path` and builds a session over its contents.
    ///
    /// Fails with [`EditorError::Io`] if the file cannot be read, or
    /// [`EditorError::Buffer`] if its bytes cannot be split into lines;
    /// either way no session exists afterwards.
    pub fn open(path: &Path) -> Result<Self, EditorError> {
        let raw = persistence::load(path)?;
        let buffer = TextBuffer::from_bytes(&raw)?;
        let viewport = Viewport::new(&buffer);
        Ok(Self {
            buffer,
            viewport,
            path: path.to_path_buf(),
            show_cursor: true,
            pending: DirtyLines::None,
        })
    }

    /// Read access to the underlying buffer.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// The file backing this session.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(&mut self, dirty: DirtyLines) {
        self.pending.merge(dirty);
    }
}

impl EditorPane for SingleBufferEditor {
    fn handle_event(&mut self, event: &EditorEvent) -> Result<(), EditorError> {
        match event {
            EditorEvent::SaveBuffer => {
                persistence::save(&self.path, self.buffer.store().iter())?;
            }
            // Declared in the event vocabulary, not implemented by the
            // single-buffer backend.
            EditorEvent::SaveBufferAs | EditorEvent::CloseBuffer => {
                return Err(EditorError::CommandNotFound);
            }
            EditorEvent::ShowCursor => self.show_cursor = true,
            EditorEvent::HideCursor => self.show_cursor = false,
            EditorEvent::MoveCursorLeft => self.buffer.move_left(),
            EditorEvent::MoveCursorRight => self.buffer.move_right(),
            EditorEvent::MoveCursorUp => self.buffer.move_up(),
            EditorEvent::MoveCursorDown => self.buffer.move_down(),
            EditorEvent::CharacterEntered(byte) => {
                let dirty = self.buffer.insert_char(*byte);
                self.record(dirty);
            }
            EditorEvent::DeleteKey => {
                let dirty = self.buffer.delete_backward();
                self.record(dirty);
            }
        }
        Ok(())
    }

    fn render(&mut self, height: usize, width: usize) -> Frame {
        let mut frame = self.viewport.render(&self.buffer, height, width);
        // A split or merge shifted lines below it; everything on screen is
        // suspect, same as when the top line changed.
        frame.full_redraw |= matches!(self.pending, DirtyLines::FromLineToEnd(_));
        frame.cursor_visible = self.show_cursor;
        self.pending = DirtyLines::None;
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use mini_edit_buffer::Position;

    fn session(content: &[u8]) -> (tempfile::TempDir, SingleBufferEditor) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.txt");
        fs::write(&path, content).unwrap();
        let editor = SingleBufferEditor::open(&path).unwrap();
        (dir, editor)
    }

    // ==================== Dispatch ====================

    #[test]
    fn test_known_events_succeed() {
        let (_dir, mut editor) = session(b"ab\ncd\n");
        for event in [
            EditorEvent::MoveCursorRight,
            EditorEvent::MoveCursorDown,
            EditorEvent::MoveCursorUp,
            EditorEvent::MoveCursorLeft,
            EditorEvent::CharacterEntered(b'x'),
            EditorEvent::DeleteKey,
            EditorEvent::ShowCursor,
            EditorEvent::HideCursor,
            EditorEvent::SaveBuffer,
        ] {
            assert!(editor.handle_event(&event).is_ok(), "{event:?} failed");
        }
    }

    #[test]
    fn test_unimplemented_events_are_command_not_found() {
        let (_dir, mut editor) = session(b"ab\n");
        let before = editor.buffer().content();
        for event in [EditorEvent::SaveBufferAs, EditorEvent::CloseBuffer] {
            let err = editor.handle_event(&event).unwrap_err();
            assert!(matches!(err, EditorError::CommandNotFound));
        }
        assert_eq!(editor.buffer().content(), before);
    }

    #[test]
    fn test_character_event_edits_at_cursor() {
        let (_dir, mut editor) = session(b"ab\ncd\n");
        editor.handle_event(&EditorEvent::MoveCursorRight).unwrap();
        editor
            .handle_event(&EditorEvent::CharacterEntered(b'X'))
            .unwrap();
        assert_eq!(editor.buffer().line_content(0), "aXb");
        assert_eq!(editor.buffer().cursor_position(), Position::new(0, 2));
    }

    #[test]
    fn test_newline_byte_splits_line() {
        let (_dir, mut editor) = session(b"ab\n");
        editor.handle_event(&EditorEvent::MoveCursorRight).unwrap();
        editor
            .handle_event(&EditorEvent::CharacterEntered(b'\n'))
            .unwrap();
        assert_eq!(editor.buffer().line_count(), 2);
        assert_eq!(editor.buffer().line_content(0), "a");
        assert_eq!(editor.buffer().line_content(1), "b");
    }

    // ==================== Cursor visibility ====================

    #[test]
    fn test_cursor_visibility_toggles_frame_flag() {
        let (_dir, mut editor) = session(b"ab\n");
        assert!(editor.render(3, 20).cursor_visible);
        editor.handle_event(&EditorEvent::HideCursor).unwrap();
        assert!(!editor.render(3, 20).cursor_visible);
        editor.handle_event(&EditorEvent::ShowCursor).unwrap();
        assert!(editor.render(3, 20).cursor_visible);
    }

    // ==================== Redraw accounting ====================

    #[test]
    fn test_in_line_edit_does_not_force_full_redraw() {
        let (_dir, mut editor) = session(b"ab\ncd\n");
        editor.render(5, 20);
        editor
            .handle_event(&EditorEvent::CharacterEntered(b'x'))
            .unwrap();
        assert!(!editor.render(5, 20).full_redraw);
    }

    #[test]
    fn test_split_forces_full_redraw_once() {
        let (_dir, mut editor) = session(b"ab\ncd\n");
        editor.render(5, 20);
        editor
            .handle_event(&EditorEvent::CharacterEntered(b'\n'))
            .unwrap();
        assert!(editor.render(5, 20).full_redraw);
        assert!(!editor.render(5, 20).full_redraw);
    }

    #[test]
    fn test_merge_forces_full_redraw() {
        let (_dir, mut editor) = session(b"ab\ncd\n");
        editor.render(5, 20);
        editor.handle_event(&EditorEvent::MoveCursorDown).unwrap();
        editor.handle_event(&EditorEvent::DeleteKey).unwrap();
        assert!(editor.render(5, 20).full_redraw);
    }

    // ==================== Save ====================

    #[test]
    fn test_save_writes_edits_back() {
        let (_dir, mut editor) = session(b"ab\ncd\n");
        editor
            .handle_event(&EditorEvent::CharacterEntered(b'!'))
            .unwrap();
        editor.handle_event(&EditorEvent::SaveBuffer).unwrap();
        assert_eq!(fs::read(editor.path()).unwrap(), b"!ab\ncd\n");
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = SingleBufferEditor::open(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, EditorError::Io(_)));
    }

    #[test]
    fn test_open_rejects_embedded_nul() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary");
        fs::write(&path, b"ab\x00cd").unwrap();
        let err = SingleBufferEditor::open(&path).unwrap_err();
        assert!(matches!(err, EditorError::Buffer(_)));
    }
}
