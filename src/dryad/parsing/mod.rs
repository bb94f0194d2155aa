//! Parsing: grammar, legality, and tree assembly
//!
//! [`grammar`] turns one logical line into a [`Command`], [`tree`] nests
//! commands by indentation with the legality table from [`legality`], and
//! [`functions`] groups everything into function definitions. The crate's
//! entry point, [`parse`], lives in [`functions`].
//!
//! [`Command`]: crate::dryad::ast::elements::Command

pub mod functions;
pub mod grammar;
pub mod legality;
pub mod tree;

pub use functions::parse;
