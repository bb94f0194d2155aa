//! Lexical layer: cursor and logical-line reader
//!
//! There is no token stream. The parser walks the source through a single
//! [`Cursor`](cursor::Cursor), and the [`LineReader`](lines::LineReader)
//! finds where each logical line begins and how far it is indented. Where a
//! line ends is decided by the grammar and the embedded-span scanner, which
//! may consume newlines inside brackets; the reader simply resumes wherever
//! the previous line's productions stopped.

pub mod cursor;
pub mod lines;

pub use cursor::Cursor;
pub use lines::{LineReader, LineStart};
