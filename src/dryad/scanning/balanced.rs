//! Balanced-span engine
//!
//! Consumes one embedded span as opaque text, tracking bracket depth,
//! strings, regex literals, and comments. The engine never interprets the
//! captured text; it only decides where the span ends.
//!
//! Two stop rules:
//!
//! - [`StopRule::Balanced`] for spans led by `(`, `[`, or `{`: the span ends
//!   when the opening bracket's match closes. Newlines are ordinary
//!   whitespace inside the brackets.
//! - [`StopRule::TopLevelWhitespace`] for token-led spans (numbers, quoted
//!   strings, regex literals, literal words): the span ends at the first
//!   whitespace or end of input with no bracket open, or just before a
//!   closing bracket that belongs to an enclosing construct.
//!
//! Regex literals are recognized only where a regex may start: after
//! nothing, an opening bracket, punctuation, or a keyword such as `return`.
//! Anywhere else a `/` is division. `//` and `/* */` comments inside a span
//! are captured as content.

use crate::dryad::lexing::Cursor;

/// Where a span is allowed to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopRule {
    /// Stop when the leading bracket's match closes
    Balanced,
    /// Stop at top-level whitespace or before an unmatched closer
    TopLevelWhitespace,
}

/// Why a span could not be completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanFailure {
    /// Input (or the line, for strings and regexes) ended inside the span
    Unterminated,
    /// A closing bracket that does not match the innermost open one
    MismatchedCloser,
}

/// The last significant token consumed, for the regex-vs-division decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prev {
    None,
    Open,
    Punct,
    Keyword,
    Operand,
}

impl Prev {
    fn allows_regex(self) -> bool {
        !matches!(self, Prev::Operand)
    }
}

/// Keywords after which a `/` starts a regex literal, not division
fn is_regex_keyword(word: &str) -> bool {
    matches!(
        word,
        "return"
            | "typeof"
            | "instanceof"
            | "in"
            | "of"
            | "new"
            | "delete"
            | "void"
            | "case"
            | "do"
            | "else"
            | "throw"
            | "yield"
    )
}

fn closer_for(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        _ => unreachable!(),
    }
}

/// Consume one span under the given stop rule.
///
/// On failure the cursor is left after everything consumed so far, so the
/// caller can report the partial text.
pub fn consume_span(cur: &mut Cursor<'_>, rule: StopRule) -> Result<(), ScanFailure> {
    let start = cur.pos();
    let mut stack: Vec<char> = Vec::new();
    let mut prev = Prev::None;

    loop {
        if stack.is_empty() && cur.pos() > start {
            match rule {
                StopRule::Balanced => return Ok(()),
                StopRule::TopLevelWhitespace => match cur.peek() {
                    None | Some(')') | Some(']') | Some('}') => return Ok(()),
                    Some(ch) if ch.is_whitespace() => return Ok(()),
                    _ => {}
                },
            }
        }

        let Some(ch) = cur.peek() else {
            return if rule == StopRule::TopLevelWhitespace && stack.is_empty() {
                Ok(())
            } else {
                Err(ScanFailure::Unterminated)
            };
        };

        match ch {
            '(' | '[' | '{' => {
                cur.bump();
                stack.push(ch);
                prev = Prev::Open;
            }
            ')' | ']' | '}' => {
                cur.bump();
                match stack.pop() {
                    Some(open) if closer_for(open) == ch => prev = Prev::Operand,
                    _ => return Err(ScanFailure::MismatchedCloser),
                }
            }
            '\'' | '"' => {
                consume_string(cur)?;
                prev = Prev::Operand;
            }
            '/' => match cur.peek_second() {
                Some('/') => {
                    // line comment: content up to (not including) the newline
                    while !cur.at_line_end() {
                        cur.bump();
                    }
                }
                Some('*') => consume_block_comment(cur)?,
                _ if prev.allows_regex() => {
                    consume_regex(cur)?;
                    prev = Prev::Operand;
                }
                _ => {
                    cur.bump();
                    prev = Prev::Punct;
                }
            },
            _ if ch.is_whitespace() => {
                cur.bump();
            }
            _ if ch.is_ascii_digit() => {
                cur.eat_while(|c| c.is_ascii_alphanumeric() || c == '.');
                prev = Prev::Operand;
            }
            _ if ch.is_alphabetic() || ch == '_' || ch == '$' => {
                let word = cur.eat_while(|c| c.is_alphanumeric() || c == '_' || c == '$');
                prev = if is_regex_keyword(word) {
                    Prev::Keyword
                } else {
                    Prev::Operand
                };
            }
            _ => {
                cur.bump();
                prev = Prev::Punct;
            }
        }
    }
}

/// Consume a quoted string. The opening quote is at the cursor. Strings may
/// not contain raw newlines.
fn consume_string(cur: &mut Cursor<'_>) -> Result<(), ScanFailure> {
    let quote = cur.bump().expect("caller checked the quote");
    loop {
        match cur.peek() {
            None | Some('\n') => return Err(ScanFailure::Unterminated),
            Some('\\') => {
                cur.bump();
                cur.bump();
            }
            Some(ch) if ch == quote => {
                cur.bump();
                return Ok(());
            }
            Some(_) => {
                cur.bump();
            }
        }
    }
}

/// Consume a regex literal with character classes and trailing flags. The
/// leading `/` is at the cursor.
fn consume_regex(cur: &mut Cursor<'_>) -> Result<(), ScanFailure> {
    cur.bump();
    let mut in_class = false;
    loop {
        match cur.peek() {
            None | Some('\n') => return Err(ScanFailure::Unterminated),
            Some('\\') => {
                cur.bump();
                cur.bump();
            }
            Some('[') => {
                in_class = true;
                cur.bump();
            }
            Some(']') => {
                in_class = false;
                cur.bump();
            }
            Some('/') if !in_class => {
                cur.bump();
                cur.eat_while(|c| c.is_ascii_alphabetic());
                return Ok(());
            }
            Some(_) => {
                cur.bump();
            }
        }
    }
}

fn consume_block_comment(cur: &mut Cursor<'_>) -> Result<(), ScanFailure> {
    cur.bump();
    cur.bump();
    loop {
        match (cur.peek(), cur.peek_second()) {
            (Some('*'), Some('/')) => {
                cur.bump();
                cur.bump();
                return Ok(());
            }
            (None, _) => return Err(ScanFailure::Unterminated),
            _ => {
                cur.bump();
            }
        }
    }
}
