//! Main module for the Dryad parser
//!
//! The pipeline is a single forward pass over the source:
//!
//! 1. Lexing: a logical-line reader measures indentation and elides blank and
//!    comment-only lines. See [lexing].
//! 2. Scanning: embedded expression/array/object, variable, and query spans
//!    are consumed as balanced verbatim text. See [scanning].
//! 3. Parsing: each logical line is matched against the command grammar, the
//!    tree builder nests commands by indentation, and the assembler groups
//!    top-level lines into function definitions. See [parsing].
//!
//! The reader and the scanner share one cursor: an embedded span started on a
//! line may swallow newlines (multi-line arrays, member chains), and the
//! reader resumes wherever the scanner stopped.

pub mod ast;
pub mod lexing;
pub mod parsing;
pub mod scanning;
pub mod testing;
