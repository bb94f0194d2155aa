//! Values: embedded spans captured as verbatim text
//!
//! Dryad does not parse the languages its arguments are written in. An
//! expression, array literal, object literal, or JSPath query is consumed as
//! one balanced span and stored verbatim, whitespace and comments included.
//! The [`ValueKind`] tag records only which surface form introduced the span.
//!
//! Variables are the exception: a chain of `.field` / `[index]` accessors
//! upgrades a `Variable` to a `VariableMember`, and member chains keep the
//! plain `$name` root at hand so later stages can resolve it without
//! re-scanning the chain.

use super::super::range::{Position, Range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which surface form introduced a value span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueKind {
    /// A parenthesized or bare token expression
    Expression,
    /// A `[...]` literal
    Array,
    /// A `{...}` literal
    Object,
    /// A bare `$name` reference
    Variable,
    /// A `$name` reference followed by accessors
    VariableMember,
    /// A `<...>` JSPath query
    Query,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Expression => "expression",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Variable => "variable",
            ValueKind::VariableMember => "variableMember",
            ValueKind::Query => "query",
        };
        write!(f, "{}", name)
    }
}

/// One embedded span, stored verbatim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Value {
    pub kind: ValueKind,

    /// The exact source slice of the span, enclosing brackets and
    /// parentheses included. Only query angle brackets are dropped.
    pub text: String,

    /// For `VariableMember` only, the `$name` the chain starts with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_variable: Option<String>,

    pub location: Range,
}

impl Value {
    fn default_location() -> Range {
        Range::new(0..0, Position::new(0, 0), Position::new(0, 0))
    }

    pub fn new(kind: ValueKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            root_variable: None,
            location: Self::default_location(),
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self {
            kind: ValueKind::Variable,
            text: name.into(),
            root_variable: None,
            location: Self::default_location(),
        }
    }

    pub fn variable_member(text: impl Into<String>, root: impl Into<String>) -> Self {
        Self {
            kind: ValueKind::VariableMember,
            text: text.into(),
            root_variable: Some(root.into()),
            location: Self::default_location(),
        }
    }

    /// Preferred builder
    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }
}

// Locations are excluded from equality so expected trees built without
// source offsets compare equal to parsed ones.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.text == other.text
            && self.root_variable == other.root_variable
    }
}

impl Eq for Value {}
