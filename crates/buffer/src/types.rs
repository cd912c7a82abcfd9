use thiserror::Error;

/// Errors from buffer construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    /// The raw input contains a byte the line accounting cannot represent.
    #[error("malformed input: embedded NUL byte at offset {0}")]
    MalformedInput(usize),
}

/// Position in the buffer as (line, column) where both are 0-indexed.
/// The column is a byte offset into the line's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Information about which lines were dirtied by a mutation.
/// The render pass uses this to decide how much of the window to erase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirtyLines {
    /// No lines changed (boundary no-op).
    None,
    /// A single line changed (insertions and deletions within a line).
    Single(usize),
    /// A range of lines changed [from, to). Produced by merging.
    Range { from: usize, to: usize },
    /// Everything from a line to the end of the buffer changed.
    /// Used when a split pushes subsequent lines down or a merge pulls
    /// them up.
    FromLineToEnd(usize),
}

impl DirtyLines {
    /// Returns true if no lines were dirtied.
    pub fn is_none(&self) -> bool {
        matches!(self, DirtyLines::None)
    }

    /// Returns the starting line of the dirty region, if any.
    pub fn start_line(&self) -> Option<usize> {
        match self {
            DirtyLines::None => None,
            DirtyLines::Single(line) => Some(*line),
            DirtyLines::Range { from, .. } => Some(*from),
            DirtyLines::FromLineToEnd(line) => Some(*line),
        }
    }

    /// Merges another dirty region into this one, producing the smallest
    /// region that covers both. Used when several events are handled
    /// between renders.
    pub fn merge(&mut self, other: DirtyLines) {
        *self = match (&*self, &other) {
            (DirtyLines::None, _) => other,
            (_, DirtyLines::None) => return,

            (DirtyLines::FromLineToEnd(a), DirtyLines::FromLineToEnd(b)) => {
                DirtyLines::FromLineToEnd((*a).min(*b))
            }
            (DirtyLines::FromLineToEnd(a), other) | (other, DirtyLines::FromLineToEnd(a)) => {
                let b = other.start_line().unwrap();
                DirtyLines::FromLineToEnd((*a).min(b))
            }

            (DirtyLines::Single(a), DirtyLines::Single(b)) => {
                if a == b {
                    DirtyLines::Single(*a)
                } else {
                    DirtyLines::Range {
                        from: (*a).min(*b),
                        to: (*a).max(*b) + 1,
                    }
                }
            }

            (DirtyLines::Single(a), DirtyLines::Range { from, to })
            | (DirtyLines::Range { from, to }, DirtyLines::Single(a)) => DirtyLines::Range {
                from: (*from).min(*a),
                to: (*to).max(*a + 1),
            },

            (DirtyLines::Range { from: a, to: b }, DirtyLines::Range { from: c, to: d }) => {
                DirtyLines::Range {
                    from: (*a).min(*c),
                    to: (*b).max(*d),
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Merge: identity ====================

    #[test]
    fn merge_none_with_single() {
        let mut d = DirtyLines::None;
        d.merge(DirtyLines::Single(5));
        assert_eq!(d, DirtyLines::Single(5));
    }

    #[test]
    fn merge_single_with_none() {
        let mut d = DirtyLines::Single(5);
        d.merge(DirtyLines::None);
        assert_eq!(d, DirtyLines::Single(5));
    }

    // ==================== Merge: singles and ranges ====================

    #[test]
    fn merge_same_single() {
        let mut d = DirtyLines::Single(3);
        d.merge(DirtyLines::Single(3));
        assert_eq!(d, DirtyLines::Single(3));
    }

    #[test]
    fn merge_distant_singles() {
        let mut d = DirtyLines::Single(3);
        d.merge(DirtyLines::Single(10));
        assert_eq!(d, DirtyLines::Range { from: 3, to: 11 });
    }

    #[test]
    fn merge_single_into_range() {
        let mut d = DirtyLines::Range { from: 5, to: 10 };
        d.merge(DirtyLines::Single(2));
        assert_eq!(d, DirtyLines::Range { from: 2, to: 10 });
    }

    #[test]
    fn merge_overlapping_ranges() {
        let mut d = DirtyLines::Range { from: 3, to: 7 };
        d.merge(DirtyLines::Range { from: 5, to: 10 });
        assert_eq!(d, DirtyLines::Range { from: 3, to: 10 });
    }

    // ==================== Merge: FromLineToEnd ====================

    #[test]
    fn merge_from_line_to_end_takes_earlier() {
        let mut d = DirtyLines::FromLineToEnd(5);
        d.merge(DirtyLines::FromLineToEnd(3));
        assert_eq!(d, DirtyLines::FromLineToEnd(3));
    }

    #[test]
    fn merge_from_line_to_end_absorbs_single() {
        let mut d = DirtyLines::Single(2);
        d.merge(DirtyLines::FromLineToEnd(5));
        assert_eq!(d, DirtyLines::FromLineToEnd(2));
    }

    // ==================== Typing sequences ====================

    #[test]
    fn merge_typing_then_newline() {
        let mut d = DirtyLines::None;
        d.merge(DirtyLines::Single(3));
        d.merge(DirtyLines::FromLineToEnd(3));
        assert_eq!(d, DirtyLines::FromLineToEnd(3));
    }
}
