//! Coordinate structure used to reference specific locations within parser input

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// A [Coords] represents a single location within the parser input
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coords {
    /// The absolute byte offset from the start of the input
    pub absolute: usize,
    /// The line number, starting at 1
    pub line: usize,
    /// The column (in bytes) within the line, starting at 1
    pub column: usize,
}

impl Coords {
    /// Compute the [Coords] for a given byte offset within `input`. Offsets past the end of the
    /// input are clamped to the end.
    pub fn from_offset(input: &[u8], offset: usize) -> Self {
        let offset = offset.min(input.len());
        let prefix = &input[..offset];
        let line = prefix.iter().filter(|b| **b == b'\n').count() + 1;
        let line_start = match prefix.iter().rposition(|b| *b == b'\n') {
            Some(index) => index + 1,
            None => 0,
        };
        Coords {
            absolute: offset,
            line,
            column: offset - line_start + 1,
        }
    }
}

impl Display for Coords {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[abs: {}, line: {}, column: {}]",
            self.absolute, self.line, self.column
        )
    }
}

impl Default for Coords {
    /// The default set of coordinates are positioned at the start of the first line
    fn default() -> Self {
        Coords {
            absolute: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Eq for Coords {}

impl PartialOrd<Self> for Coords {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coords {
    fn cmp(&self, other: &Self) -> Ordering {
        self.absolute.cmp(&other.absolute)
    }
}
