//! Logical-line reader
//!
//! Finds where the next logical line begins and measures its indentation.
//! Blank lines and comment-only lines are elided. Indentation is the count
//! of leading whitespace characters on the physical line where the logical
//! line begins; spaces and tabs each count as one unit and are not
//! normalized against each other.
//!
//! The reader does not decide where a line ends. The grammar consumes the
//! line's content (possibly across newlines, inside embedded spans) and
//! leaves the cursor at a newline or at end of input; the next call picks
//! up from there.

use super::cursor::Cursor;

/// Where a logical line begins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStart {
    /// Leading whitespace units on the physical line
    pub indent: usize,
    /// Byte offset of the first content character
    pub offset: usize,
}

/// Iterates logical line starts over a shared cursor
pub struct LineReader;

impl LineReader {
    /// Advance to the next logical line, or `None` at end of input.
    ///
    /// Expects the cursor to sit at the start of input, at a newline, or at
    /// end of input.
    pub fn next_line(cur: &mut Cursor<'_>) -> Option<LineStart> {
        loop {
            if cur.peek() == Some('\n') {
                cur.bump();
            }

            let indent = cur.eat_while(|ch| ch == ' ' || ch == '\t').chars().count();
            cur.skip_trivia();

            if cur.at_end() {
                return None;
            }
            if cur.peek() == Some('\n') {
                // blank or comment-only line
                continue;
            }

            return Some(LineStart {
                indent,
                offset: cur.pos(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starts(source: &str) -> Vec<(usize, &str)> {
        let mut cur = Cursor::new(source);
        let mut out = Vec::new();
        while let Some(line) = LineReader::next_line(&mut cur) {
            // consume to end of physical line like the grammar would
            while !cur.at_line_end() {
                cur.bump();
            }
            let content = &source[line.offset..];
            let end = content
                .find(|c: char| c.is_whitespace())
                .unwrap_or(content.len());
            out.push((line.indent, &content[..end]));
        }
        out
    }

    #[test]
    fn test_measures_indentation() {
        let lines = starts("func\n    SET\n        1\n");
        assert_eq!(lines, vec![(0, "func"), (4, "SET"), (8, "1")]);
    }

    #[test]
    fn test_tabs_count_one_unit() {
        let lines = starts("func\n\t\tSET\n");
        assert_eq!(lines, vec![(0, "func"), (2, "SET")]);
    }

    #[test]
    fn test_elides_blank_and_comment_lines() {
        let lines = starts("func\n\n   \n    // note\n    SET\n");
        assert_eq!(lines, vec![(0, "func"), (4, "SET")]);
    }

    #[test]
    fn test_leading_comment_before_content() {
        let lines = starts("    /* note */ SET\n");
        assert_eq!(lines, vec![(4, "SET")]);
    }

    #[test]
    fn test_empty_input() {
        let mut cur = Cursor::new("");
        assert_eq!(LineReader::next_line(&mut cur), None);

        let mut cur = Cursor::new("\n\n  // only comments\n");
        assert_eq!(LineReader::next_line(&mut cur), None);
    }
}
