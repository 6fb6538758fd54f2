//! Position and range tracking for source locations
//!
//!     Every node carries a [`Range`] made of two [`Position`]s. Rows and columns are
//!     1-based, and columns count characters (Unicode scalar values), not bytes.
//!
//!     The end position is exclusive: it names the column right after the last character
//!     of the node. A node ending a line therefore ends at `line length + 1`, and a
//!     LINEBREAK token ends at column 1 of the row that follows it.
//!
//!     Ranges are plain values. They are computed once by the lexer (for terminals) or at
//!     finalization (for statements and functions) and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A row:column position in source text (both 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// A source range with start and end positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Shorthand for `Range::new(Position::new(..), Position::new(..))`
    pub fn from_coords(start_row: usize, start_column: usize, end_row: usize, end_column: usize) -> Self {
        Self::new(
            Position::new(start_row, start_column),
            Position::new(end_row, end_column),
        )
    }

    /// Whether `other` lies entirely within this range
    pub fn encloses(&self, other: &Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The range spanning from the start of `self` to the end of `other`
    pub fn to(&self, other: &Range) -> Range {
        Range::new(self.start, other.end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})-({})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let range = Range::from_coords(1, 1, 2, 2);
        assert_eq!(range.to_string(), "(1:1)-(2:2)");
        assert_eq!(range.start.to_string(), "1:1");
        assert_eq!(range.end.to_string(), "2:2");
    }

    #[test]
    fn test_position_ordering() {
        let pos1 = Position::new(1, 5);
        let pos2 = Position::new(1, 5);
        let pos3 = Position::new(2, 3);

        assert_eq!(pos1, pos2);
        assert!(pos1 < pos3);
        assert!(Position::new(1, 9) < Position::new(2, 1));
    }

    #[test]
    fn test_encloses() {
        let range = Range::from_coords(1, 5, 2, 3);

        assert!(range.encloses(&range));
        assert!(range.encloses(&Range::from_coords(1, 9, 2, 1)));
        assert!(!range.encloses(&Range::from_coords(1, 4, 1, 6)));
        assert!(!range.encloses(&Range::from_coords(2, 1, 2, 4)));
    }

    #[test]
    fn test_to_joins_ranges() {
        let first = Range::from_coords(1, 1, 1, 5);
        let last = Range::from_coords(3, 2, 4, 1);

        assert_eq!(first.to(&last), Range::from_coords(1, 1, 4, 1));
    }
}
