//! JSPath query spans
//!
//! A query runs from `<` to the matching `>` that is not inside a nested
//! `{}`, `[]`, or `()` group. The captured text is the inner content without
//! the angle brackets, verbatim.
//!
//! Rejected as malformed (error text includes the angle brackets): an empty
//! or whitespace-only query, and an empty `{}` predicate anywhere inside.

use crate::dryad::ast::elements::{Value, ValueKind};
use crate::dryad::ast::error::{incomplete_command, malformed_expression, ParseResult};
use crate::dryad::ast::range::SourceLocation;
use crate::dryad::lexing::Cursor;

/// Scan a query at the cursor; the `<` is the current character.
pub fn scan_query(cur: &mut Cursor<'_>, location: &SourceLocation) -> ParseResult<Value> {
    let start = cur.pos();
    cur.bump(); // '<'

    let mut depth: Vec<char> = Vec::new();
    let mut empty_predicate = false;

    loop {
        match cur.peek() {
            None => {
                let text = cur.slice(start);
                let range = location.range(start..cur.pos());
                return if text.chars().count() <= 1 {
                    Err(incomplete_command(range))
                } else {
                    Err(malformed_expression(text.trim_end(), range))
                };
            }
            Some('>') if depth.is_empty() => {
                cur.bump();
                break;
            }
            Some(ch @ ('{' | '[' | '(')) => {
                cur.bump();
                depth.push(ch);
                if ch == '{' && cur.rest().trim_start().starts_with('}') {
                    empty_predicate = true;
                }
            }
            Some(ch @ ('}' | ']' | ')')) => {
                cur.bump();
                let matches = matches!(
                    (depth.last(), ch),
                    (Some('{'), '}') | (Some('['), ']') | (Some('('), ')')
                );
                if matches {
                    depth.pop();
                }
            }
            Some(_) => {
                cur.bump();
            }
        }
    }

    let text = cur.slice(start);
    let inner = &text[1..text.len() - 1];
    let range = location.range(start..cur.pos());

    if inner.trim().is_empty() || empty_predicate {
        return Err(malformed_expression(text, range));
    }

    Ok(Value::new(ValueKind::Query, inner).at(range))
}
