use std::io;

use mini_edit_buffer::BufferError;
use thiserror::Error;

/// Errors surfaced by an editor backend.
///
/// Navigation and edit commands at buffer boundaries are never errors;
/// they are silent no-ops. Allocation failure has no variant
/// here: line growth goes through `Vec`, whose allocator aborts the process
/// when growth cannot be satisfied, and the buffer cannot guarantee correct
/// operation past that point anyway.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Reading or writing the backing file failed. A load failure aborts
    /// the session; a save failure leaves the in-memory buffer untouched.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The backend has no handler for the dispatched event.
    #[error("no handler for event")]
    CommandNotFound,

    /// The backing file's bytes could not be split into lines.
    #[error(transparent)]
    Buffer(#[from] BufferError),
}
