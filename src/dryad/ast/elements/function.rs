//! Function definitions
//!
//! A Dryad file is a flat sequence of function definitions. A definition
//! opens on an indentation-zero line naming the function and declaring its
//! parameters; the body is every following indented line up to the next
//! indentation-zero line.

use super::super::range::{Position, Range};
use super::command::CommandNode;
use super::value::Value;
use serde::{Deserialize, Serialize};

/// One `$param` declaration, with its optional `= value` default
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterDeclaration {
    /// The parameter name including the `$` sigil
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    pub location: Range,
}

impl ParameterDeclaration {
    fn default_location() -> Range {
        Range::new(0..0, Position::new(0, 0), Position::new(0, 0))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            location: Self::default_location(),
        }
    }

    pub fn with_default(name: impl Into<String>, default: Value) -> Self {
        Self {
            name: name.into(),
            default: Some(default),
            location: Self::default_location(),
        }
    }

    /// Preferred builder
    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }
}

impl PartialEq for ParameterDeclaration {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.default == other.default
    }
}

impl Eq for ParameterDeclaration {}

/// A named function with its parameter list and body tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDefinition {
    /// The function name; identifiers may contain hyphens
    pub name: String,

    pub parameters: Vec<ParameterDeclaration>,

    pub body: Vec<CommandNode>,

    pub location: Range,
}

impl FunctionDefinition {
    fn default_location() -> Range {
        Range::new(0..0, Position::new(0, 0), Position::new(0, 0))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            body: Vec::new(),
            location: Self::default_location(),
        }
    }

    /// Preferred builder
    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<ParameterDeclaration>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_body(mut self, body: Vec<CommandNode>) -> Self {
        self.body = body;
        self
    }
}

impl PartialEq for FunctionDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.parameters == other.parameters && self.body == other.body
    }
}

impl Eq for FunctionDefinition {}
