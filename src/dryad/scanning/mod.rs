//! Embedded-text scanner
//!
//! Command arguments are written in languages Dryad does not parse:
//! free-form expressions, JSON-like array/object literals, and JSPath
//! queries. [`scan_value`] recognizes where such a span starts, hands it to
//! the right sub-scanner, and captures it as one [`Value`] of verbatim text.
//!
//! What may start a value:
//!
//! - `(`, `[`, `{` lead a bracketed span ([`balanced`])
//! - `<` leads a query ([`query`])
//! - `$` leads a variable reference or member chain ([`variable`])
//! - a digit, `.` followed by a digit, a quote, a `/` regex literal, or one
//!   of the whole words `null`/`true`/`false` lead a token span
//!
//! Anything else, a bare identifier in particular, is not a value;
//! [`scan_value`] returns `None` and the caller decides what the leftover
//! text means.

pub mod balanced;
pub mod query;
pub mod variable;

use crate::dryad::ast::elements::{Value, ValueKind};
use crate::dryad::ast::error::{incomplete_command, malformed_expression, ParseResult};
use crate::dryad::ast::range::SourceLocation;
use crate::dryad::lexing::Cursor;
use balanced::{consume_span, StopRule};
use once_cell::sync::Lazy;
use regex::Regex;

static LITERAL_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:null|true|false)\b").expect("valid pattern"));

/// Scan one value at the cursor, after skipping spaces and comments.
///
/// `Ok(None)` means the line ended or the upcoming text cannot start a
/// value; the cursor then sits at that text.
pub fn scan_value(cur: &mut Cursor<'_>, location: &SourceLocation) -> ParseResult<Option<Value>> {
    cur.skip_trivia();

    let Some(ch) = cur.peek() else { return Ok(None) };
    match ch {
        '\n' => Ok(None),
        '(' | '[' | '{' => scan_bracketed(cur, location).map(Some),
        '<' => query::scan_query(cur, location).map(Some),
        '$' => variable::scan_variable(cur, location),
        _ if token_can_start(cur) => scan_token(cur, location).map(Some),
        _ => Ok(None),
    }
}

/// Whether the text at the cursor can start a token-led value
fn token_can_start(cur: &Cursor<'_>) -> bool {
    match cur.peek() {
        Some(ch) if ch.is_ascii_digit() => true,
        Some('.') => matches!(cur.peek_second(), Some(d) if d.is_ascii_digit()),
        Some('\'') | Some('"') | Some('/') => true,
        _ => LITERAL_WORD.is_match(cur.rest()),
    }
}

/// Scan a span led by `(`, `[`, or `{`
fn scan_bracketed(cur: &mut Cursor<'_>, location: &SourceLocation) -> ParseResult<Value> {
    let start = cur.pos();
    let opener = cur.peek().expect("caller checked the opener");

    if consume_span(cur, StopRule::Balanced).is_err() {
        return Err(failure_error(cur, start, location));
    }

    let text = cur.slice(start);
    let range = location.range(start..cur.pos());

    match opener {
        '[' => Ok(Value::new(ValueKind::Array, text).at(range)),
        '{' => Ok(Value::new(ValueKind::Object, text).at(range)),
        _ => {
            if text[1..text.len() - 1].trim().is_empty() {
                return Err(malformed_expression(text, range));
            }
            Ok(Value::new(ValueKind::Expression, text).at(range))
        }
    }
}

/// Scan a token-led span: numbers, strings, regex literals, literal words,
/// and whatever operators and nested brackets they chain into
fn scan_token(cur: &mut Cursor<'_>, location: &SourceLocation) -> ParseResult<Value> {
    let start = cur.pos();

    if consume_span(cur, StopRule::TopLevelWhitespace).is_err() {
        return Err(failure_error(cur, start, location));
    }

    let text = cur.slice(start);
    let range = location.range(start..cur.pos());
    Ok(Value::new(ValueKind::Expression, text).at(range))
}

/// A span that could not complete: a single consumed character means the
/// input ran out right away, anything longer is a malformed expression
/// carrying the partial text.
fn failure_error(
    cur: &Cursor<'_>,
    start: usize,
    location: &SourceLocation,
) -> Box<crate::dryad::ast::error::SyntaxError> {
    let text = cur.slice(start);
    let range = location.range(start..cur.pos());
    if text.chars().count() <= 1 {
        incomplete_command(range)
    } else {
        malformed_expression(text.trim_end(), range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dryad::ast::error::SyntaxErrorKind;

    fn scan(source: &str) -> ParseResult<Option<Value>> {
        let mut cur = Cursor::new(source);
        let location = SourceLocation::new(source);
        scan_value(&mut cur, &location)
    }

    fn scanned(source: &str) -> Value {
        scan(source).unwrap().unwrap()
    }

    #[test]
    fn test_parenthesized_expression_keeps_parens() {
        let value = scanned("(1 + 2)");
        assert_eq!(value.kind, ValueKind::Expression);
        assert_eq!(value.text, "(1 + 2)");
    }

    #[test]
    fn test_array_and_object_keep_brackets() {
        let value = scanned("[1, 2]");
        assert_eq!(value.kind, ValueKind::Array);
        assert_eq!(value.text, "[1, 2]");

        let value = scanned("{\"a\": 1}");
        assert_eq!(value.kind, ValueKind::Object);
        assert_eq!(value.text, "{\"a\": 1}");
    }

    #[test]
    fn test_parenthesized_array_is_expression() {
        let value = scanned("([])");
        assert_eq!(value.kind, ValueKind::Expression);
        assert_eq!(value.text, "([])");
    }

    #[test]
    fn test_empty_parens_malformed_but_empty_literals_fine() {
        assert_eq!(scanned("[]").kind, ValueKind::Array);
        assert_eq!(scanned("{}").kind, ValueKind::Object);

        let err = scan("( )").unwrap_err();
        assert_eq!(
            err.kind,
            SyntaxErrorKind::MalformedExpression {
                text: "( )".to_string()
            }
        );
    }

    #[test]
    fn test_token_values() {
        assert_eq!(scanned("42 rest").text, "42");
        assert_eq!(scanned(".5 rest").text, ".5");
        assert_eq!(scanned("'hi there' rest").text, "'hi there'");
        assert_eq!(scanned("true rest").text, "true");
        assert_eq!(scanned("null rest").text, "null");
    }

    #[test]
    fn test_bare_identifier_is_not_a_value() {
        assert!(scan("abc").unwrap().is_none());
        assert!(scan("trueish").unwrap().is_none());
        assert!(scan("nullable").unwrap().is_none());
    }

    #[test]
    fn test_comments_skipped_before_value() {
        let value = scanned("/* note */ 42");
        assert_eq!(value.text, "42");
    }

    #[test]
    fn test_lone_opener_is_incomplete() {
        let err = scan("[").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::IncompleteCommand);
    }

    #[test]
    fn test_unclosed_span_is_malformed() {
        let err = scan("[1, 2  ").unwrap_err();
        assert_eq!(
            err.kind,
            SyntaxErrorKind::MalformedExpression {
                text: "[1, 2".to_string()
            }
        );
    }

    #[test]
    fn test_multiline_array() {
        let value = scanned("[\n  1,\n  2\n]");
        assert_eq!(value.kind, ValueKind::Array);
        assert_eq!(value.text, "[\n  1,\n  2\n]");
    }
}
