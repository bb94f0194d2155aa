//! Expected-tree builders for tests
//!
//! Integration suites compare parsed trees against hand-built ones. These
//! helpers keep the hand-built side short: value constructors by kind, node
//! constructors per command, and [`parse_single`] for the common case of
//! testing one command inside a throwaway function.
//!
//! Locations are left at their defaults; tree equality ignores them.

use crate::dryad::ast::elements::{
    Callee, Command, CommandNode, NamedArgument, Value, ValueKind,
};
use crate::dryad::ast::error::ParseResult;
use crate::dryad::parsing::parse;

pub fn expression(text: &str) -> Value {
    Value::new(ValueKind::Expression, text)
}

pub fn array(text: &str) -> Value {
    Value::new(ValueKind::Array, text)
}

pub fn object(text: &str) -> Value {
    Value::new(ValueKind::Object, text)
}

pub fn variable(name: &str) -> Value {
    Value::variable(name)
}

pub fn member(text: &str, root: &str) -> Value {
    Value::variable_member(text, root)
}

pub fn query(text: &str) -> Value {
    Value::new(ValueKind::Query, text)
}

pub fn value_node(value: Value) -> CommandNode {
    CommandNode::new(Command::Value(value))
}

pub fn test_node(condition: Value) -> CommandNode {
    CommandNode::new(Command::Test { condition })
}

pub fn choose() -> CommandNode {
    CommandNode::new(Command::Choose)
}

pub fn when(condition: Value) -> CommandNode {
    CommandNode::new(Command::When { condition })
}

pub fn otherwise() -> CommandNode {
    CommandNode::new(Command::Otherwise)
}

pub fn set(target: &str, value: Option<Value>) -> CommandNode {
    CommandNode::new(Command::Set {
        target: target.to_string(),
        value,
    })
}

pub fn call(name: &str, args: Vec<Value>) -> CommandNode {
    CommandNode::new(Command::Call {
        callee: Callee::Function(name.to_string()),
        args,
        named_args: vec![],
        result: None,
    })
}

pub fn call_full(
    callee: Callee,
    args: Vec<Value>,
    named_args: Vec<(&str, Value)>,
    result: Option<&str>,
) -> CommandNode {
    CommandNode::new(Command::Call {
        callee,
        args,
        named_args: named_args
            .into_iter()
            .map(|(name, value)| NamedArgument::new(name, value))
            .collect(),
        result: result.map(str::to_string),
    })
}

pub fn each(key: Option<&str>, value: Option<&str>, source: Value) -> CommandNode {
    CommandNode::new(Command::Each {
        key: key.map(str::to_string),
        value: value.map(str::to_string),
        source,
    })
}

pub fn with_node(context: Value) -> CommandNode {
    CommandNode::new(Command::With { context })
}

pub fn item(value: Option<Value>) -> CommandNode {
    CommandNode::new(Command::Item { value })
}

pub fn keyval(key: Option<Value>, value: Option<Value>) -> CommandNode {
    CommandNode::new(Command::KeyVal { key, value })
}

pub fn key(value: Option<Value>) -> CommandNode {
    CommandNode::new(Command::Key { value })
}

pub fn val(value: Option<Value>) -> CommandNode {
    CommandNode::new(Command::Val { value })
}

/// Parse a body snippet inside a throwaway function and return its
/// top-level nodes. Each snippet line is indented four spaces under a
/// `func` header, so `"SET $a 1"` parses the way it would inside a real
/// definition.
pub fn parse_single(snippet: &str) -> ParseResult<Vec<CommandNode>> {
    let mut source = String::from("func\n");
    for line in snippet.lines() {
        source.push_str("    ");
        source.push_str(line);
        source.push('\n');
    }
    let mut functions = parse(&source)?;
    Ok(functions.remove(0).body)
}

/// Parse and return the error display, panicking if the source parses
pub fn parse_error(source: &str) -> String {
    match parse(source) {
        Ok(_) => panic!("expected a syntax error for {:?}", source),
        Err(err) => err.to_string(),
    }
}
