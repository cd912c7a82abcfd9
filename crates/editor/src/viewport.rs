//! Viewport mapping between buffer lines and the terminal window.
//!
//! The viewport tracks which buffer line sits at the top of the window and
//! restores the invariant `top_row <= cursor.row <= top_row + height - 1`
//! on every render pass; callers never adjust it directly. Scrolling up
//! jumps straight to the cursor row; scrolling down advances one row at a
//! time until the cursor is back in view, which stays correct even after
//! large cursor jumps.
//!
//! The handle to the top line is a cache. It is re-derived from the cursor's
//! own handle on every pass rather than being updated by the edit engine, so
//! a line deletion crossing the viewport boundary can never leave a stale
//! reference in play.

use mini_edit_buffer::{LineId, TextBuffer};

use crate::render::{display_width, expand_row, scroll_start, Frame};

/// The visible window onto a [`TextBuffer`].
#[derive(Debug)]
pub struct Viewport {
    top_row: usize,
    /// Cached handle to the line at `top_row`; refreshed each render pass.
    top: LineId,
}

impl Viewport {
    /// Creates a viewport showing the buffer from its first line.
    pub fn new(buffer: &TextBuffer) -> Self {
        Self {
            top_row: 0,
            top: buffer.store().first(),
        }
    }

    /// Row number of the first visible line.
    pub fn top_row(&self) -> usize {
        self.top_row
    }

    /// Handle of the line at [`top_row`](Self::top_row), as of the last
    /// render pass.
    pub fn top_line(&self) -> LineId {
        self.top
    }

    /// Moves `top_row` the minimum needed to bring `cursor_row` into a
    /// window of `height` rows. Returns true if the top changed.
    fn reconcile(&mut self, cursor_row: usize, height: usize) -> bool {
        let old_top = self.top_row;
        if cursor_row < self.top_row {
            self.top_row = cursor_row;
        } else {
            while cursor_row >= self.top_row + height {
                self.top_row += 1;
            }
        }
        self.top_row != old_top
    }

    /// Renders the window contents for a `height` x `width` cell grid.
    ///
    /// Restores the vertical-scroll invariant first; a changed top forces
    /// `full_redraw`. Only the cursor's own row is horizontally scrolled;
    /// all other rows render from source offset 0, truncated to `width`
    /// display cells. Rows past the end of the buffer are empty.
    pub fn render(&mut self, buffer: &TextBuffer, height: usize, width: usize) -> Frame {
        if height == 0 {
            return Frame {
                rows: Vec::new(),
                cursor: (0, 0),
                cursor_visible: true,
                full_redraw: false,
            };
        }

        let cursor = buffer.cursor_position();
        let top_changed = self.reconcile(cursor.line, height);

        // Re-derive the top handle from the cursor's handle: after the
        // reconcile above, the cursor row is within `height` rows of the
        // top, so this walk is O(height).
        let store = buffer.store();
        let mut top = buffer.cursor_line_id();
        for _ in 0..cursor.line - self.top_row {
            top = store.prev(top).expect("top_row out of range");
        }
        self.top = top;

        let mut rows = Vec::with_capacity(height);
        let mut cursor_x = 0;
        let mut line = Some(top);
        for y in 0..height {
            let Some(id) = line else {
                rows.push(String::new());
                continue;
            };
            let bytes = store.line(id).as_bytes();

            if self.top_row + y == cursor.line {
                // The cursor's row: horizontal scroll so the cursor's
                // expanded column stays inside the window.
                let cursor_display_x = display_width(bytes, cursor.col);
                let mut start = 0;
                let mut skipped = 0;
                if width > 0 && cursor_display_x >= width {
                    let target = (cursor_display_x / width) * width;
                    (start, skipped) = scroll_start(bytes, target);
                }
                cursor_x = cursor_display_x - skipped;
                rows.push(expand_row(bytes, start, width));
            } else {
                rows.push(expand_row(bytes, 0, width));
            }

            line = store.next(id);
        }

        Frame {
            rows,
            cursor: (cursor_x, cursor.line - self.top_row),
            cursor_visible: true,
            full_redraw: top_changed,
        }
    }
}
