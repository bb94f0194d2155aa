//! AST element types
//!
//! Three layers:
//!
//! - [`Value`] - an embedded span captured as verbatim text, tagged with a
//!   [`ValueKind`]
//! - [`Command`] / [`CommandNode`] - one logical line of a function body and
//!   its indentation-nested children
//! - [`FunctionDefinition`] - a top-level header line plus its body tree

pub mod command;
pub mod function;
pub mod value;

pub use command::{Callee, Command, CommandKind, CommandNode, NamedArgument};
pub use function::{FunctionDefinition, ParameterDeclaration};
pub use value::{Value, ValueKind};
