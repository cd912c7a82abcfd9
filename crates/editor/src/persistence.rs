//! Plain-file load and save for the editing buffer.
//!
//! The on-disk convention matches the load split: one `\n` after every
//! line, nothing else. Saving a buffer that was loaded from a terminated
//! file reproduces it byte for byte.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use mini_edit_buffer::Line;

use crate::error::EditorError;

/// Reads the whole backing file. Missing or unreadable files surface as
/// [`EditorError::Io`]; the caller aborts the session.
pub fn load(path: &Path) -> Result<Vec<u8>, EditorError> {
    Ok(fs::read(path)?)
}

/// Writes each line followed by a single `\n`.
///
/// Any failure surfaces as [`EditorError::Io`]; the in-memory buffer is
/// not touched either way.
pub fn save<'a>(
    path: &Path,
    lines: impl Iterator<Item = &'a Line>,
) -> Result<(), EditorError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use mini_edit_buffer::TextBuffer;

    #[test]
    fn test_save_terminates_every_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let buffer = TextBuffer::from_bytes(b"ab\ncd").unwrap();

        save(&path, buffer.store().iter()).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"ab\ncd\n");
    }

    #[test]
    fn test_load_save_round_trip_is_identity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.txt");
        fs::write(&path, b"one\n\nthree\ttabbed\n").unwrap();

        let raw = load(&path).unwrap();
        let buffer = TextBuffer::from_bytes(&raw).unwrap();
        save(&path, buffer.store().iter()).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"one\n\nthree\ttabbed\n");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, EditorError::Io(_)));
    }
}
