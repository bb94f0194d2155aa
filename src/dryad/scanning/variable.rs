//! Variable references and member chains
//!
//! A `$name` reference may be followed by a chain of `.identifier` and
//! `[...]` accessors, with whitespace and newlines permitted before each
//! accessor. The captured text is the verbatim source slice from the sigil
//! through the last complete accessor.
//!
//! Accessor attempts backtrack: `$var.` with no identifier after the dot, or
//! `$var[` that never closes, ends the chain at the last complete accessor
//! and leaves the remainder unconsumed for the caller to report.

use super::balanced::{consume_span, StopRule};
use crate::dryad::ast::elements::Value;
use crate::dryad::ast::error::ParseResult;
use crate::dryad::ast::range::SourceLocation;
use crate::dryad::lexing::Cursor;

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Scan a `$` reference at the cursor. Returns `None` (cursor untouched)
/// when the sigil is not followed by an identifier.
pub fn scan_variable(
    cur: &mut Cursor<'_>,
    location: &SourceLocation,
) -> ParseResult<Option<Value>> {
    let start = cur.pos();
    cur.bump(); // the sigil

    if cur.eat_while(is_name_char).is_empty() {
        cur.set_pos(start);
        return Ok(None);
    }

    let root = cur.slice(start).to_string();
    let root_end = cur.pos();
    let mut chain_end = root_end;

    loop {
        cur.eat_while(|ch| ch.is_whitespace());
        match cur.peek() {
            Some('.') => {
                cur.bump();
                if cur.eat_while(is_name_char).is_empty() {
                    break;
                }
                chain_end = cur.pos();
            }
            Some('[') => {
                let mut probe = cur.clone();
                if consume_span(&mut probe, StopRule::Balanced).is_err() {
                    break;
                }
                cur.set_pos(probe.pos());
                chain_end = cur.pos();
            }
            _ => break,
        }
    }
    cur.set_pos(chain_end);

    // only member chains carry the root; a plain variable is its own root
    let range = location.range(start..chain_end);
    let value = if chain_end == root_end {
        Value::variable(root)
    } else {
        Value::variable_member(cur.slice(start), root)
    };
    Ok(Some(value.at(range)))
}
