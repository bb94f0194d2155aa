//! Commands and the command tree
//!
//! A [`Command`] is the parsed form of one logical line of a function body.
//! A [`CommandNode`] pairs a command with the children nested under it by
//! indentation. Which children a node may host depends on the command kind
//! and, for bare values, on the value's shape; that legality check lives in
//! the parsing layer, not here.

use super::super::range::{Position, Range};
use super::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed command line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    /// A bare value statement
    Value(Value),

    /// `TEST <condition>` - guard for the surrounding block
    Test { condition: Value },

    /// `CHOOSE` - selects among `WHEN`/`OTHERWISE` arms
    Choose,

    /// `WHEN <condition>` - one arm of a `CHOOSE`
    When { condition: Value },

    /// `OTHERWISE` - the fallback arm of a `CHOOSE`
    Otherwise,

    /// `SET $target [<value>]` - binds a variable inline or from children
    Set {
        target: String,
        value: Option<Value>,
    },

    /// `CALL <callee> [args...] [name=value...] [AS $result]`
    Call {
        callee: Callee,
        args: Vec<Value>,
        named_args: Vec<NamedArgument>,
        result: Option<String>,
    },

    /// `EACH [$key] [$value] <source>` - iterates the source
    Each {
        key: Option<String>,
        value: Option<String>,
        source: Value,
    },

    /// `WITH <context>` - rescopes the block to the context value
    With { context: Value },

    /// `ITEM [<value>]` - one element of an array literal or call argument
    Item { value: Option<Value> },

    /// `KEYVAL [<key> [<value>]]` - one entry of an object literal
    KeyVal {
        key: Option<Value>,
        value: Option<Value>,
    },

    /// `KEY [<value>]` - the key field of a `KEYVAL`
    Key { value: Option<Value> },

    /// `VAL [<value>]` - the value field of a `KEYVAL`
    Val { value: Option<Value> },
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Value(_) => CommandKind::Value,
            Command::Test { .. } => CommandKind::Test,
            Command::Choose => CommandKind::Choose,
            Command::When { .. } => CommandKind::When,
            Command::Otherwise => CommandKind::Otherwise,
            Command::Set { .. } => CommandKind::Set,
            Command::Call { .. } => CommandKind::Call,
            Command::Each { .. } => CommandKind::Each,
            Command::With { .. } => CommandKind::With,
            Command::Item { .. } => CommandKind::Item,
            Command::KeyVal { .. } => CommandKind::KeyVal,
            Command::Key { .. } => CommandKind::Key,
            Command::Val { .. } => CommandKind::Val,
        }
    }
}

/// The discriminant of a [`Command`], used in legality checks and errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    Value,
    Test,
    Choose,
    When,
    Otherwise,
    Set,
    Call,
    Each,
    With,
    Item,
    KeyVal,
    Key,
    Val,
}

impl fmt::Display for CommandKind {
    /// The source keyword, or `value` for bare value statements
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandKind::Value => "value",
            CommandKind::Test => "TEST",
            CommandKind::Choose => "CHOOSE",
            CommandKind::When => "WHEN",
            CommandKind::Otherwise => "OTHERWISE",
            CommandKind::Set => "SET",
            CommandKind::Call => "CALL",
            CommandKind::Each => "EACH",
            CommandKind::With => "WITH",
            CommandKind::Item => "ITEM",
            CommandKind::KeyVal => "KEYVAL",
            CommandKind::Key => "KEY",
            CommandKind::Val => "VAL",
        };
        write!(f, "{}", name)
    }
}

/// What a `CALL` invokes: a function by name, or a value holding one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Callee {
    Function(String),
    Value(Value),
}

/// A `name=value` call argument. `name` keeps the `$` sigil form even when
/// the source wrote it bare (`arg1=1` binds `$arg1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedArgument {
    pub name: String,
    pub value: Value,
}

impl NamedArgument {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        let name = name.into();
        let name = if name.starts_with('$') {
            name
        } else {
            format!("${}", name)
        };
        Self { name, value }
    }
}

/// A command and the commands nested under it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandNode {
    pub command: Command,
    pub children: Vec<CommandNode>,
    pub location: Range,
}

impl CommandNode {
    fn default_location() -> Range {
        Range::new(0..0, Position::new(0, 0), Position::new(0, 0))
    }

    pub fn new(command: Command) -> Self {
        Self {
            command,
            children: Vec::new(),
            location: Self::default_location(),
        }
    }

    /// Preferred builder
    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }

    pub fn with_children(mut self, children: Vec<CommandNode>) -> Self {
        self.children = children;
        self
    }
}

// Location excluded from equality; children compare recursively.
impl PartialEq for CommandNode {
    fn eq(&self, other: &Self) -> bool {
        self.command == other.command && self.children == other.children
    }
}

impl Eq for CommandNode {}
