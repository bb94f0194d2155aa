//! Error types for Dryad parsing
//!
//! Parsing is fail-fast: the first syntax error aborts the parse and is
//! returned as a boxed [`SyntaxError`]. Every error carries a [`Range`] so
//! tooling can point at the offending source.
//!
//! The four error kinds mirror the four ways a Dryad line can go wrong:
//!
//! - [`SyntaxErrorKind::IncompleteCommand`] - the line or file ended where
//!   more input was required
//! - [`SyntaxErrorKind::UnexpectedInput`] - leftover text where none was
//!   allowed, or text that cannot start a value
//! - [`SyntaxErrorKind::MalformedExpression`] - an embedded span that opened
//!   but cannot be completed
//! - [`SyntaxErrorKind::UnexpectedCommand`] - a structurally legal command in
//!   a position its parent does not allow

use super::elements::CommandKind;
use super::range::Range;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, Box<SyntaxError>>;

/// A syntax error produced while parsing Dryad source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub location: Range,
}

/// The specific failure behind a [`SyntaxError`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SyntaxErrorKind {
    /// Input ended where more was required
    IncompleteCommand,

    /// Text that cannot belong to the command at this point
    UnexpectedInput { found: String },

    /// An embedded span that opened but cannot be completed
    MalformedExpression { text: String },

    /// A command that is not legal under its parent
    UnexpectedCommand { command: CommandKind, parent: String },
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, location: Range) -> Self {
        Self { kind, location }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SyntaxErrorKind::IncompleteCommand => {
                write!(f, "SyntaxError: Incomplete command")
            }
            SyntaxErrorKind::UnexpectedInput { found } => {
                write!(f, "SyntaxError: Incorrect input '{}'", found)
            }
            SyntaxErrorKind::MalformedExpression { text } => {
                write!(f, "SyntaxError: Malformed expression '{}'", text)
            }
            SyntaxErrorKind::UnexpectedCommand { command, parent } => {
                write!(
                    f,
                    "SyntaxError: Unexpected command '{}' inside '{}'",
                    command, parent
                )
            }
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Build an [`SyntaxErrorKind::IncompleteCommand`] error
pub fn incomplete_command(location: Range) -> Box<SyntaxError> {
    Box::new(SyntaxError::new(SyntaxErrorKind::IncompleteCommand, location))
}

/// Build an [`SyntaxErrorKind::UnexpectedInput`] error
pub fn unexpected_input(found: impl Into<String>, location: Range) -> Box<SyntaxError> {
    Box::new(SyntaxError::new(
        SyntaxErrorKind::UnexpectedInput {
            found: found.into(),
        },
        location,
    ))
}

/// Build an [`SyntaxErrorKind::MalformedExpression`] error
pub fn malformed_expression(text: impl Into<String>, location: Range) -> Box<SyntaxError> {
    Box::new(SyntaxError::new(
        SyntaxErrorKind::MalformedExpression { text: text.into() },
        location,
    ))
}

/// Build an [`SyntaxErrorKind::UnexpectedCommand`] error
pub fn unexpected_command(
    command: CommandKind,
    parent: impl Into<String>,
    location: Range,
) -> Box<SyntaxError> {
    Box::new(SyntaxError::new(
        SyntaxErrorKind::UnexpectedCommand {
            command,
            parent: parent.into(),
        },
        location,
    ))
}

/// Format a snippet of the source around an error location, with a `>>`
/// marker on the offending line. Intended for CLI-style diagnostics.
pub fn format_source_context(source: &str, location: &Range, context_lines: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let error_line = location.start.line;

    let start = error_line.saturating_sub(context_lines);
    let end = (error_line + context_lines + 1).min(lines.len());

    let mut out = String::new();
    for (idx, line) in lines.iter().enumerate().take(end).skip(start) {
        let marker = if idx == error_line { ">>" } else { "  " };
        out.push_str(&format!("{} {:4} | {}\n", marker, idx + 1, line));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dryad::ast::range::Position;

    fn loc(line: usize, column: usize) -> Range {
        Range::new(0..0, Position::new(line, column), Position::new(line, column))
    }

    #[test]
    fn test_incomplete_display() {
        let err = incomplete_command(loc(0, 0));
        assert_eq!(err.to_string(), "SyntaxError: Incomplete command");
    }

    #[test]
    fn test_unexpected_input_display() {
        let err = unexpected_input("aaa bbb", loc(2, 4));
        assert_eq!(err.to_string(), "SyntaxError: Incorrect input 'aaa bbb'");
    }

    #[test]
    fn test_malformed_expression_display() {
        let err = malformed_expression("<.books{}>", loc(1, 4));
        assert_eq!(
            err.to_string(),
            "SyntaxError: Malformed expression '<.books{}>'"
        );
    }

    #[test]
    fn test_unexpected_command_display() {
        let err = unexpected_command(CommandKind::When, "SET".to_string(), loc(3, 4));
        assert_eq!(
            err.to_string(),
            "SyntaxError: Unexpected command 'WHEN' inside 'SET'"
        );
    }

    #[test]
    fn test_errors_round_trip_through_serde() {
        let err = SyntaxError::new(
            SyntaxErrorKind::UnexpectedCommand {
                command: CommandKind::Item,
                parent: "CHOOSE".to_string(),
            },
            loc(2, 8),
        );
        let json = serde_json::to_string(&err).unwrap();
        let back: SyntaxError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_source_context_marker() {
        let source = "func\n    SET $a\n    BAD";
        let out = format_source_context(source, &loc(2, 4), 1);
        assert!(out.contains(">>    3 | "));
        assert!(out.contains("      2 | "));
    }
}
