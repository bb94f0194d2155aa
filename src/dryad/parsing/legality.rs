//! Child legality
//!
//! What a node may host depends not on the node alone but on the context it
//! opens for its children. `TEST` and `WITH` are transparent: they open the
//! same context they themselves sit in, so a `TEST` under an array literal
//! still hosts `ITEM` lines.

use crate::dryad::ast::elements::{Command, CommandKind, ValueKind};

/// The kind of children a node accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildContext {
    /// Function bodies and the bodies of When, Otherwise, Each, Set, Item,
    /// Key, and Val
    Statement,
    /// Children of an array-literal value
    ArrayItems,
    /// Children of an object-literal value
    ObjectEntries,
    /// Children of a Call
    CallArguments,
    /// Children of a Choose
    ChooseArms,
    /// Children of a KeyVal
    PairFields,
    /// Scalar values host nothing
    None,
}

/// The context a command opens for its children, given the context it sits
/// in itself
pub fn child_context(command: &Command, inherited: ChildContext) -> ChildContext {
    match command {
        Command::Value(value) => match value.kind {
            ValueKind::Array => ChildContext::ArrayItems,
            ValueKind::Object => ChildContext::ObjectEntries,
            _ => ChildContext::None,
        },
        Command::Test { .. } | Command::With { .. } => inherited,
        Command::Choose => ChildContext::ChooseArms,
        Command::Call { .. } => ChildContext::CallArguments,
        Command::KeyVal { .. } => ChildContext::PairFields,
        Command::When { .. }
        | Command::Otherwise
        | Command::Set { .. }
        | Command::Each { .. }
        | Command::Item { .. }
        | Command::Key { .. }
        | Command::Val { .. } => ChildContext::Statement,
    }
}

/// Whether a child of the given kind is legal in the context
pub fn allows(context: ChildContext, child: CommandKind) -> bool {
    use CommandKind::*;
    match context {
        ChildContext::Statement => {
            matches!(child, Value | Test | Choose | Set | Call | Each | With)
        }
        ChildContext::ArrayItems | ChildContext::CallArguments => {
            matches!(child, Item | Test | With)
        }
        ChildContext::ObjectEntries => matches!(child, KeyVal | Test | With),
        ChildContext::ChooseArms => matches!(child, When | Otherwise),
        ChildContext::PairFields => matches!(child, Key | Val),
        ChildContext::None => false,
    }
}
