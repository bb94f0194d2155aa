//! Position and location tracking for source code locations
//!
//! This module defines the data structures for representing positions and
//! locations in source code, as well as the utility for converting byte
//! offsets to line/column positions.
//!
//! ## Types
//!
//! - [`Position`] - A line:column position in source code
//! - [`Range`] - A source code range with start/end positions and byte span
//! - [`SourceLocation`] - Utility for converting byte offsets to positions
//!
//! ## Key Design
//!
//! - **Mandatory locations**: All AST nodes have required `location: Range`
//!   fields; the default range is (0, 0) to (0, 0), never an option.
//! - **Byte ranges preserved**: Stores both byte spans and line:column
//!   positions. Columns are byte offsets within their line.
//! - **Excluded from equality**: AST node `PartialEq` impls ignore locations;
//!   `Range` itself compares normally.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range as ByteRange;

/// Represents a position in source code (line and column, both 0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Represents a location in source code (byte span plus start/end positions)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub span: ByteRange<usize>,
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(span: ByteRange<usize>, start: Position, end: Position) -> Self {
        Self { span, start, end }
    }

    /// Check if a position is contained within this location
    pub fn contains(&self, pos: Position) -> bool {
        (self.start.line < pos.line
            || (self.start.line == pos.line && self.start.column <= pos.column))
            && (self.end.line > pos.line
                || (self.end.line == pos.line && self.end.column >= pos.column))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::new(
            ByteRange { start: 0, end: 0 },
            Position::default(),
            Position::default(),
        )
    }
}

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    /// Create a new SourceLocation from source code
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position
    pub fn position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let column = byte_offset - self.line_starts[line];

        Position::new(line, column)
    }

    /// Convert a byte range to a location
    pub fn range(&self, span: ByteRange<usize>) -> Range {
        let start = self.position(span.start);
        let end = self.position(span.end);
        Range::new(span, start, end)
    }

    /// Get the total number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(1, 5) < Position::new(2, 3));
        assert!(Position::new(1, 5) < Position::new(1, 6));
        assert_eq!(Position::new(1, 5), Position::new(1, 5));
    }

    #[test]
    fn test_range_contains() {
        let range = Range::new(0..0, Position::new(1, 5), Position::new(2, 10));

        assert!(!range.contains(Position::new(1, 4)));
        assert!(range.contains(Position::new(1, 5)));
        assert!(range.contains(Position::new(2, 0)));
        assert!(range.contains(Position::new(2, 10)));
        assert!(!range.contains(Position::new(2, 11)));
        assert!(!range.contains(Position::new(3, 0)));
    }

    #[test]
    fn test_byte_to_position_multiline() {
        let loc = SourceLocation::new("Hello\nworld\ntest");

        assert_eq!(loc.position(0), Position::new(0, 0));
        assert_eq!(loc.position(5), Position::new(0, 5));
        assert_eq!(loc.position(6), Position::new(1, 0));
        assert_eq!(loc.position(10), Position::new(1, 4));
        assert_eq!(loc.position(12), Position::new(2, 0));
    }

    #[test]
    fn test_byte_to_position_with_unicode() {
        let loc = SourceLocation::new("Hello\nwörld");
        // Columns are byte offsets within the line
        assert_eq!(loc.position(6), Position::new(1, 0));
        assert_eq!(loc.position(7), Position::new(1, 1));
    }

    #[test]
    fn test_range_conversion() {
        let loc = SourceLocation::new("Hello\nWorld\nTest");
        let range = loc.range(6..12);

        assert_eq!(range.start, Position::new(1, 0));
        assert_eq!(range.end, Position::new(2, 0));
        assert_eq!(range.span, 6..12);
    }

    #[test]
    fn test_line_count() {
        assert_eq!(SourceLocation::new("single").line_count(), 1);
        assert_eq!(SourceLocation::new("line1\nline2\nline3").line_count(), 3);
    }

    #[test]
    fn test_display() {
        let range = Range::new(0..0, Position::new(1, 0), Position::new(2, 5));
        assert_eq!(format!("{}", range), "1:0..2:5");
    }
}
