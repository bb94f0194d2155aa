//! Command grammar
//!
//! One logical line, one command. The line starts with an uppercase keyword
//! or, failing that, is a bare value statement. Keyword dispatch is a fixed
//! list; `AS` is recognized so it can be rejected as a statement keyword
//! (it only appears inside a `CALL` result clause).
//!
//! The grammar reports three of the four error kinds: a required value
//! missing at end of line is an incomplete command; text that cannot start a
//! value, or leftover text after a complete command, is unexpected input;
//! embedded spans that cannot complete surface as malformed expressions from
//! the scanner.

use crate::dryad::ast::elements::{Callee, Command, NamedArgument, Value, ValueKind};
use crate::dryad::ast::error::{incomplete_command, unexpected_input, ParseResult};
use crate::dryad::ast::range::{Range, SourceLocation};
use crate::dryad::lexing::Cursor;
use crate::dryad::scanning::scan_value;
use once_cell::sync::Lazy;
use regex::Regex;

static KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:OTHERWISE|KEYVAL|CHOOSE|CALL|TEST|WHEN|EACH|WITH|ITEM|SET|KEY|VAL|AS)\b")
        .expect("valid pattern")
});

static VARIABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$[A-Za-z0-9_]+").expect("valid pattern"));

/// Function names are identifiers that may contain hyphens
pub static FUNCTION_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*").expect("valid pattern"));

static ARGUMENT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").expect("valid pattern"));

/// Consume a leading regex match, returning the matched slice
pub fn take_match<'src>(cur: &mut Cursor<'src>, pattern: &Regex) -> Option<&'src str> {
    let m = pattern.find(cur.rest())?;
    let text = &cur.rest()[..m.end()];
    cur.set_pos(cur.pos() + m.end());
    Some(text)
}

fn point_range(cur: &Cursor<'_>, location: &SourceLocation) -> Range {
    location.range(cur.pos()..cur.pos())
}

fn line_range(cur: &Cursor<'_>, location: &SourceLocation) -> Range {
    location.range(cur.pos()..cur.pos() + cur.rest_of_line().len())
}

/// Parse the command beginning at the cursor. The caller checks the line
/// end afterwards with [`expect_line_end`].
pub fn parse_command(cur: &mut Cursor<'_>, location: &SourceLocation) -> ParseResult<Command> {
    let start = cur.pos();
    let Some(keyword) = take_match(cur, &KEYWORD) else {
        return match scan_value(cur, location)? {
            Some(value) => Ok(Command::Value(value)),
            None => Err(unexpected_input(cur.rest_of_line(), line_range(cur, location))),
        };
    };

    match keyword {
        "TEST" => Ok(Command::Test {
            condition: require_value(cur, location)?,
        }),
        "CHOOSE" => Ok(Command::Choose),
        "WHEN" => Ok(Command::When {
            condition: require_value(cur, location)?,
        }),
        "OTHERWISE" => Ok(Command::Otherwise),
        "SET" => parse_set(cur, location),
        "CALL" => parse_call(cur, location),
        "EACH" => parse_each(cur, location),
        "WITH" => Ok(Command::With {
            context: require_value(cur, location)?,
        }),
        "ITEM" => Ok(Command::Item {
            value: scan_value(cur, location)?,
        }),
        "KEYVAL" => {
            let key = scan_value(cur, location)?;
            let value = match key {
                Some(_) => scan_value(cur, location)?,
                None => None,
            };
            Ok(Command::KeyVal { key, value })
        }
        "KEY" => Ok(Command::Key {
            value: scan_value(cur, location)?,
        }),
        "VAL" => Ok(Command::Val {
            value: scan_value(cur, location)?,
        }),
        "AS" => {
            cur.set_pos(start);
            Err(unexpected_input(cur.rest_of_line(), line_range(cur, location)))
        }
        _ => unreachable!("keyword list is exhaustive"),
    }
}

/// After a command's productions, only trivia may remain on the line
pub fn expect_line_end(cur: &mut Cursor<'_>, location: &SourceLocation) -> ParseResult<()> {
    cur.skip_trivia();
    if cur.at_line_end() {
        Ok(())
    } else {
        Err(unexpected_input(cur.rest_of_line(), line_range(cur, location)))
    }
}

/// A value that must be present: absence at end of line is an incomplete
/// command, anything unscannable is unexpected input.
fn require_value(cur: &mut Cursor<'_>, location: &SourceLocation) -> ParseResult<Value> {
    match scan_value(cur, location)? {
        Some(value) => Ok(value),
        None if cur.at_line_end() => Err(incomplete_command(point_range(cur, location))),
        None => Err(unexpected_input(cur.rest_of_line(), line_range(cur, location))),
    }
}

fn parse_set(cur: &mut Cursor<'_>, location: &SourceLocation) -> ParseResult<Command> {
    cur.skip_trivia();
    let Some(target) = take_match(cur, &VARIABLE) else {
        return if cur.at_line_end() {
            Err(incomplete_command(point_range(cur, location)))
        } else {
            Err(unexpected_input(cur.rest_of_line(), line_range(cur, location)))
        };
    };
    let value = scan_value(cur, location)?;
    Ok(Command::Set {
        target: target.to_string(),
        value,
    })
}

fn parse_call(cur: &mut Cursor<'_>, location: &SourceLocation) -> ParseResult<Command> {
    cur.skip_trivia();

    // The callee position is fixed: an identifier here is always a function
    // name, so `CALL AS $p1` calls a function named `AS`.
    let callee = match take_match(cur, &FUNCTION_NAME) {
        Some(name) => Callee::Function(name.to_string()),
        None => match scan_value(cur, location)? {
            Some(value) => Callee::Value(value),
            None if cur.at_line_end() => {
                return Err(incomplete_command(point_range(cur, location)))
            }
            None => {
                return Err(unexpected_input(cur.rest_of_line(), line_range(cur, location)))
            }
        },
    };

    let mut args = Vec::new();
    let mut named_args = Vec::new();
    let mut result = None;

    loop {
        cur.skip_trivia();
        if cur.at_line_end() {
            break;
        }

        let mark = cur.pos();
        if let Some(word) = take_match(cur, &ARGUMENT_NAME) {
            if word == "AS" {
                cur.skip_trivia();
                if cur.at_line_end() {
                    return Err(incomplete_command(point_range(cur, location)));
                }
                let Some(target) = take_match(cur, &VARIABLE) else {
                    return Err(unexpected_input(cur.rest_of_line(), line_range(cur, location)));
                };
                result = Some(target.to_string());
                break;
            }

            // literal words are positional values, not argument names
            if matches!(word, "null" | "true" | "false") {
                cur.set_pos(mark);
                args.push(require_value(cur, location)?);
                continue;
            }

            cur.skip_spaces();
            if cur.peek() == Some('=') {
                cur.bump();
                let value = require_value(cur, location)?;
                named_args.push(NamedArgument::new(word, value));
                continue;
            }

            cur.set_pos(mark);
            return Err(unexpected_input(cur.rest_of_line(), line_range(cur, location)));
        }

        match scan_value(cur, location)? {
            Some(value) => args.push(value),
            None => {
                return Err(unexpected_input(cur.rest_of_line(), line_range(cur, location)))
            }
        }
    }

    Ok(Command::Call {
        callee,
        args,
        named_args,
        result,
    })
}

fn parse_each(cur: &mut Cursor<'_>, location: &SourceLocation) -> ParseResult<Command> {
    let mut pending: Vec<Value> = Vec::new();

    loop {
        cur.skip_trivia();
        if cur.at_line_end() {
            break;
        }
        // everything before the source must be a plain variable binding,
        // and there are at most two of them
        if let Some(last) = pending.last() {
            if last.kind != ValueKind::Variable || pending.len() == 3 {
                return Err(unexpected_input(cur.rest_of_line(), line_range(cur, location)));
            }
        }
        match scan_value(cur, location)? {
            Some(value) => pending.push(value),
            None => {
                return Err(unexpected_input(cur.rest_of_line(), line_range(cur, location)))
            }
        }
    }

    let Some(source) = pending.pop() else {
        return Err(incomplete_command(point_range(cur, location)));
    };
    let mut names = pending.into_iter().map(|binding| binding.text);
    let (key, value) = match names.len() {
        0 => (None, None),
        1 => (None, names.next()),
        _ => (names.next(), names.next()),
    };
    Ok(Command::Each { key, value, source })
}
