//! The editor backend interface.
//!
//! A driver talks to a backend through exactly two calls: feed it one event,
//! ask it for a frame. Today there is a single implementation
//! ([`SingleBufferEditor`](crate::single_buffer::SingleBufferEditor)); the
//! trait keeps the contract explicit so future backends (multi-buffer,
//! read-only viewers) can slot in without re-deriving it.

use mini_edit_input::EditorEvent;

use crate::error::EditorError;
use crate::render::Frame;

/// An editor backend: consumes events, produces frames.
pub trait EditorPane {
    /// Applies one event to the backend's state.
    ///
    /// Events the backend does not implement yield
    /// [`EditorError::CommandNotFound`] and change no state. Boundary
    /// navigation is a successful no-op, not an error.
    fn handle_event(&mut self, event: &EditorEvent) -> Result<(), EditorError>;

    /// Produces the frame for a `height` x `width` cell window, restoring
    /// the viewport invariant in the process. Rendering has no error path.
    fn render(&mut self, height: usize, width: usize) -> Frame;
}
