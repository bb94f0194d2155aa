//! AST for parsed Dryad programs
//!
//! A parse result is an ordered sequence of
//! [`FunctionDefinition`](elements::FunctionDefinition)s, each owning a tree
//! of [`CommandNode`](elements::CommandNode)s. Nodes carry a mandatory
//! [`Range`](range::Range) location which is excluded from equality — trees
//! that differ only in source placement compare equal.

pub mod elements;
pub mod error;
pub mod range;
pub mod snapshot;
