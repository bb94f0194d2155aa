//! # dryad
//!
//! A parser for the Dryad command language.
//!
//! Dryad programs are indentation-structured: a file is a sequence of named
//! function definitions, and each function body is a tree of commands whose
//! nesting is given purely by leading whitespace. Command arguments embed
//! three opaque sub-languages — free-form expressions, JSON-like array and
//! object literals, and angle-bracket JSPath queries — which are captured as
//! balanced verbatim text rather than parsed.
//!
//! The public surface is [`parse`], which turns source text into an ordered
//! sequence of [`FunctionDefinition`]s or a single [`SyntaxError`].
//!
//! For the expected-tree builders used by the integration suites, see the
//! [testing module](dryad::testing).

pub mod dryad;

pub use dryad::ast::elements::{
    Callee, Command, CommandKind, CommandNode, FunctionDefinition, NamedArgument,
    ParameterDeclaration, Value, ValueKind,
};
pub use dryad::ast::error::{ParseResult, SyntaxError, SyntaxErrorKind};
pub use dryad::ast::range::{Position, Range};
pub use dryad::parsing::parse;
