//! A byte-position cursor over the source text
//!
//! All parsing stages share one cursor. Positions are byte offsets, and
//! every mutation moves forward by whole `char`s, so a saved position is
//! always a valid restore point for backtracking.

/// Forward-only reading head over the source, with explicit save/restore
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    /// Current byte offset
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Restore a previously saved offset
    pub fn set_pos(&mut self, pos: usize) {
        debug_assert!(self.source.is_char_boundary(pos));
        self.pos = pos;
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The unread remainder of the source
    pub fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    /// The unread remainder of the current physical line, with trailing
    /// whitespace trimmed. Used for error payloads.
    pub fn rest_of_line(&self) -> &'src str {
        let rest = self.rest();
        let end = rest.find('\n').unwrap_or(rest.len());
        rest[..end].trim_end()
    }

    /// The slice from a saved offset to the current position
    pub fn slice(&self, start: usize) -> &'src str {
        &self.source[start..self.pos]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn peek_second(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// True at end of input or just before a newline
    pub fn at_line_end(&self) -> bool {
        matches!(self.peek(), None | Some('\n'))
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Consume `chars` while the predicate holds, returning the consumed slice
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.bump();
        }
        self.slice(start)
    }

    /// Skip spaces and tabs, but not newlines
    pub fn skip_spaces(&mut self) {
        self.eat_while(|ch| ch == ' ' || ch == '\t');
    }

    /// Skip spaces, tabs, and comments. Line comments stop before the
    /// newline; block comments may swallow newlines. An unterminated block
    /// comment consumes the rest of the input.
    pub fn skip_trivia(&mut self) {
        loop {
            self.skip_spaces();
            match (self.peek(), self.peek_second()) {
                (Some('/'), Some('/')) => {
                    while !self.at_line_end() {
                        self.bump();
                    }
                }
                (Some('/'), Some('*')) => {
                    self.bump();
                    self.bump();
                    loop {
                        match (self.peek(), self.peek_second()) {
                            (Some('*'), Some('/')) => {
                                self.bump();
                                self.bump();
                                break;
                            }
                            (None, _) => break,
                            _ => {
                                self.bump();
                            }
                        }
                    }
                }
                _ => break,
            }
        }
    }
}
