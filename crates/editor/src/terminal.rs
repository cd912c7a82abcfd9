//! Terminal frontend: raw mode, key decoding, and frame painting.
//!
//! This is the only module that touches the terminal. The editor core never
//! sees it: the frontend hands events in and paints the frames that come
//! back. Raw mode and the alternate screen are managed by an RAII guard so
//! the terminal is restored on every exit path, including panics unwinding
//! through `main`.
//!
//! Key bindings follow the nano-style originals: arrows move, Backspace
//! deletes, Ctrl-O saves, Ctrl-X quits.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use mini_edit_input::EditorEvent;

use crate::error::EditorError;
use crate::pane::EditorPane;
use crate::render::Frame;

/// What the input loop should do with a decoded key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    /// Leave the editor.
    Quit,
    /// Hand the event to the backend.
    Forward(EditorEvent),
}

/// Maps a terminal key event to a loop action. Unbound keys map to `None`.
pub fn decode_key(key: &KeyEvent) -> Option<LoopAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('x') => Some(LoopAction::Quit),
            KeyCode::Char('o') => Some(LoopAction::Forward(EditorEvent::SaveBuffer)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(LoopAction::Forward(EditorEvent::MoveCursorUp)),
        KeyCode::Down => Some(LoopAction::Forward(EditorEvent::MoveCursorDown)),
        KeyCode::Left => Some(LoopAction::Forward(EditorEvent::MoveCursorLeft)),
        KeyCode::Right => Some(LoopAction::Forward(EditorEvent::MoveCursorRight)),
        KeyCode::Backspace | KeyCode::Delete => Some(LoopAction::Forward(EditorEvent::DeleteKey)),
        KeyCode::Enter => Some(LoopAction::Forward(EditorEvent::CharacterEntered(b'\n'))),
        KeyCode::Tab => Some(LoopAction::Forward(EditorEvent::CharacterEntered(b'\t'))),
        KeyCode::Char(c) if c.is_ascii() && !c.is_ascii_control() => {
            Some(LoopAction::Forward(EditorEvent::CharacterEntered(c as u8)))
        }
        _ => None,
    }
}

/// Raw mode + alternate screen for the lifetime of the value.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self, EditorError> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
    }
}

/// Draws a frame. The cursor is hidden while rows are rewritten so partial
/// paints never flash it mid-screen.
fn paint(out: &mut impl Write, frame: &Frame) -> io::Result<()> {
    queue!(out, Hide)?;
    if frame.full_redraw {
        queue!(out, Clear(ClearType::All))?;
    }
    for (y, row) in frame.rows.iter().enumerate() {
        queue!(
            out,
            MoveTo(0, y as u16),
            Clear(ClearType::UntilNewLine),
            Print(row)
        )?;
    }
    if frame.cursor_visible {
        let (x, y) = frame.cursor;
        queue!(out, MoveTo(x as u16, y as u16), Show)?;
    }
    out.flush()
}

/// Runs the input loop over `pane` until the user quits.
///
/// Renders once per handled event, matching the backend's one-command-
/// at-a-time model. Unbound keys and events the backend does not implement
/// are ignored; I/O failures (save included) end the session and surface to
/// the caller after the terminal is restored.
pub fn run(pane: &mut dyn EditorPane) -> Result<(), EditorError> {
    let _guard = TerminalGuard::enter()?;
    let mut out = io::stdout();
    let (mut width, mut height) = terminal::size()?;

    loop {
        let frame = pane.render(height as usize, width as usize);
        paint(&mut out, &frame).map_err(EditorError::Io)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match decode_key(&key) {
                Some(LoopAction::Quit) => break,
                Some(LoopAction::Forward(editor_event)) => {
                    match pane.handle_event(&editor_event) {
                        Ok(()) | Err(EditorError::CommandNotFound) => {}
                        Err(err) => return Err(err),
                    }
                }
                None => {}
            },
            Event::Resize(new_width, new_height) => {
                width = new_width;
                height = new_height;
            }
            _ => {}
        }
    }

    Ok(())
}
