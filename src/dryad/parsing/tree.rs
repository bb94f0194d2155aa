//! Indentation tree builder
//!
//! Assembles one function body from a stream of (indent, command) lines. A
//! line is the child of the nearest preceding line with strictly smaller
//! indentation. The first child of a block fixes the block's child
//! indentation; every sibling must sit at exactly that depth.
//!
//! Legality is checked on entry, so an illegal child is rejected at the line
//! that introduces it.

use super::legality::{allows, child_context, ChildContext};
use crate::dryad::ast::elements::{Command, CommandNode};
use crate::dryad::ast::error::{unexpected_command, ParseResult};

struct OpenNode {
    indent: usize,
    node: CommandNode,
    context: ChildContext,
    child_indent: Option<usize>,
    key_taken: bool,
    val_taken: bool,
}

/// Builds the body tree of one function definition
pub struct TreeBuilder {
    function_name: String,
    stack: Vec<OpenNode>,
    body: Vec<CommandNode>,
    body_indent: Option<usize>,
}

impl TreeBuilder {
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            stack: Vec::new(),
            body: Vec::new(),
            body_indent: None,
        }
    }

    /// Add the next line of the body
    pub fn push(&mut self, indent: usize, node: CommandNode) -> ParseResult<()> {
        self.close_to(indent);
        let kind = node.command.kind();

        let (parent_context, parent_label) = match self.stack.last() {
            Some(open) => (open.context, open.node.command.kind().to_string()),
            None => (ChildContext::Statement, self.function_name.clone()),
        };

        // the first child fixes the block's indentation for its siblings
        let child_indent = match self.stack.last_mut() {
            Some(open) => &mut open.child_indent,
            None => &mut self.body_indent,
        };
        match *child_indent {
            None => *child_indent = Some(indent),
            Some(expected) if expected != indent => {
                return Err(unexpected_command(kind, parent_label, node.location));
            }
            Some(_) => {}
        }

        if !allows(parent_context, kind) {
            return Err(unexpected_command(kind, parent_label, node.location));
        }
        self.check_pair_fields(&node)?;

        let context = child_context(&node.command, parent_context);
        self.stack.push(OpenNode {
            indent,
            node,
            context,
            child_indent: None,
            key_taken: false,
            val_taken: false,
        });
        Ok(())
    }

    /// `KEY` and `VAL` may each appear at most once under a `KEYVAL`, and
    /// only when the matching inline value was not already given.
    fn check_pair_fields(&mut self, node: &CommandNode) -> ParseResult<()> {
        let Some(parent) = self.stack.last_mut() else { return Ok(()) };
        if parent.context != ChildContext::PairFields {
            return Ok(());
        }
        let Command::KeyVal { key, value } = &parent.node.command else {
            return Ok(());
        };

        let kind = node.command.kind();
        let taken = match &node.command {
            Command::Key { .. } => {
                let taken = parent.key_taken || key.is_some();
                parent.key_taken = true;
                taken
            }
            Command::Val { .. } => {
                let taken = parent.val_taken || value.is_some();
                parent.val_taken = true;
                taken
            }
            _ => false,
        };

        if taken {
            let parent_label = parent.node.command.kind().to_string();
            return Err(unexpected_command(kind, parent_label, node.location.clone()));
        }
        Ok(())
    }

    /// Close every open node at or beyond the given indentation
    fn close_to(&mut self, indent: usize) {
        while matches!(self.stack.last(), Some(open) if open.indent >= indent) {
            let closed = self.stack.pop().expect("matched above");
            match self.stack.last_mut() {
                Some(parent) => parent.node.children.push(closed.node),
                None => self.body.push(closed.node),
            }
        }
    }

    /// Close everything and return the finished body
    pub fn finish(mut self) -> Vec<CommandNode> {
        self.close_to(0);
        self.body
    }
}
