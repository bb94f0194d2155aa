//! AST Snapshot - a normalized intermediate representation of a parse result
//!
//! This module provides a canonical, format-agnostic representation of the
//! parsed tree suitable for serialization to any output format (JSON, test
//! fixtures, tree printers).
//!
//! The snapshot captures the full structure with node types, labels,
//! attributes, and children - so each consumer can focus on presentation
//! without reimplementing AST traversal.

use super::elements::{Callee, Command, CommandNode, FunctionDefinition, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A snapshot of an AST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstSnapshot {
    /// The type of node (e.g., "Function", "Call", "Value")
    pub node_type: String,

    /// The primary label or text content of the node
    pub label: String,

    /// Additional attributes specific to the node type
    pub attributes: HashMap<String, String>,

    /// Child nodes in the tree
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    /// Create a new snapshot with the given node type and label
    pub fn new(node_type: String, label: String) -> Self {
        Self {
            node_type,
            label,
            attributes: HashMap::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute to this snapshot
    pub fn with_attribute(mut self, key: String, value: String) -> Self {
        self.attributes.insert(key, value);
        self
    }

    /// Add a child snapshot
    pub fn with_child(mut self, child: AstSnapshot) -> Self {
        self.children.push(child);
        self
    }
}

/// Build a snapshot for a whole parse result
///
/// The root node is a `Program` whose children are the function definitions
/// in source order.
pub fn snapshot_from_functions(functions: &[FunctionDefinition]) -> AstSnapshot {
    let mut snapshot = AstSnapshot::new(
        "Program".to_string(),
        format!("Program ({} functions)", functions.len()),
    );
    for function in functions {
        snapshot.children.push(snapshot_from_function(function));
    }
    snapshot
}

/// Build a snapshot for one function definition
pub fn snapshot_from_function(function: &FunctionDefinition) -> AstSnapshot {
    let mut snapshot = AstSnapshot::new("Function".to_string(), function.name.clone());

    for param in &function.parameters {
        let mut p = AstSnapshot::new("Parameter".to_string(), param.name.clone());
        if let Some(default) = &param.default {
            p = p.with_attribute("default".to_string(), default.text.clone());
        }
        snapshot.children.push(p);
    }

    for node in &function.body {
        snapshot.children.push(snapshot_from_command(node));
    }
    snapshot
}

/// Build a snapshot for one command node and its children
pub fn snapshot_from_command(node: &CommandNode) -> AstSnapshot {
    let mut snapshot = match &node.command {
        Command::Value(value) => value_snapshot("Value", value),
        Command::Test { condition } => {
            AstSnapshot::new("Test".to_string(), condition.text.clone())
        }
        Command::Choose => AstSnapshot::new("Choose".to_string(), String::new()),
        Command::When { condition } => {
            AstSnapshot::new("When".to_string(), condition.text.clone())
        }
        Command::Otherwise => AstSnapshot::new("Otherwise".to_string(), String::new()),
        Command::Set { target, value } => {
            let mut s = AstSnapshot::new("Set".to_string(), target.clone());
            if let Some(value) = value {
                s = s.with_child(value_snapshot("Value", value));
            }
            s
        }
        Command::Call {
            callee,
            args,
            named_args,
            result,
        } => {
            let label = match callee {
                Callee::Function(name) => name.clone(),
                Callee::Value(value) => value.text.clone(),
            };
            let mut s = AstSnapshot::new("Call".to_string(), label);
            for arg in args {
                s = s.with_child(value_snapshot("Argument", arg));
            }
            for named in named_args {
                s = s.with_child(
                    value_snapshot("NamedArgument", &named.value)
                        .with_attribute("name".to_string(), named.name.clone()),
                );
            }
            if let Some(result) = result {
                s = s.with_attribute("result".to_string(), result.clone());
            }
            s
        }
        Command::Each { key, value, source } => {
            let mut s = AstSnapshot::new("Each".to_string(), source.text.clone());
            if let Some(key) = key {
                s = s.with_attribute("key".to_string(), key.clone());
            }
            if let Some(value) = value {
                s = s.with_attribute("value".to_string(), value.clone());
            }
            s
        }
        Command::With { context } => {
            AstSnapshot::new("With".to_string(), context.text.clone())
        }
        Command::Item { value } => optional_value_snapshot("Item", value),
        Command::KeyVal { key, value } => {
            let mut s = AstSnapshot::new("KeyVal".to_string(), String::new());
            if let Some(key) = key {
                s = s.with_child(value_snapshot("Key", key));
            }
            if let Some(value) = value {
                s = s.with_child(value_snapshot("Val", value));
            }
            s
        }
        Command::Key { value } => optional_value_snapshot("Key", value),
        Command::Val { value } => optional_value_snapshot("Val", value),
    };

    for child in &node.children {
        snapshot.children.push(snapshot_from_command(child));
    }
    snapshot
}

fn value_snapshot(node_type: &str, value: &Value) -> AstSnapshot {
    let mut snapshot = AstSnapshot::new(node_type.to_string(), value.text.clone())
        .with_attribute("kind".to_string(), value.kind.to_string());
    if let Some(root) = &value.root_variable {
        snapshot = snapshot.with_attribute("root".to_string(), root.clone());
    }
    snapshot
}

fn optional_value_snapshot(node_type: &str, value: &Option<Value>) -> AstSnapshot {
    match value {
        Some(value) => value_snapshot(node_type, value),
        None => AstSnapshot::new(node_type.to_string(), String::new()),
    }
}
