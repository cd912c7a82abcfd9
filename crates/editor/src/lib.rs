//! mini-edit: a minimal terminal text editor.
//!
//! The editing core lives in `mini-edit-buffer`; this crate adds everything
//! between that core and the terminal: the viewport/render engine, the
//! backend dispatch trait and its single-buffer implementation, plain-file
//! persistence, and the crossterm frontend.

pub mod error;
pub mod pane;
pub mod persistence;
pub mod render;
pub mod single_buffer;
pub mod terminal;
pub mod viewport;

pub use error::EditorError;
pub use pane::EditorPane;
pub use render::{Frame, TAB_STOP};
pub use single_buffer::SingleBufferEditor;
pub use viewport::Viewport;
