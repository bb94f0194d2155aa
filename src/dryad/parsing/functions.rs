//! Function-definition assembler
//!
//! Drives the whole parse: the line reader yields logical lines, an
//! indentation-zero line opens a new function definition, and every indented
//! line is parsed as a command and handed to the open definition's tree
//! builder. Parsing is fail-fast; the first error aborts.

use super::grammar::{self, take_match, FUNCTION_NAME};
use super::tree::TreeBuilder;
use crate::dryad::ast::elements::{CommandNode, FunctionDefinition, ParameterDeclaration};
use crate::dryad::ast::error::{
    incomplete_command, unexpected_command, unexpected_input, ParseResult,
};
use crate::dryad::ast::range::SourceLocation;
use crate::dryad::lexing::{Cursor, LineReader};
use once_cell::sync::Lazy;
use regex::Regex;

static PARAMETER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$[A-Za-z0-9_]+").expect("valid pattern"));

/// Parse a Dryad source file into its function definitions.
///
/// Empty input (or input with only blank and comment lines) is an empty
/// program, not an error.
pub fn parse(source: &str) -> ParseResult<Vec<FunctionDefinition>> {
    let location = SourceLocation::new(source);
    let mut cur = Cursor::new(source);

    let mut finished: Vec<FunctionDefinition> = Vec::new();
    let mut open: Option<(FunctionDefinition, TreeBuilder)> = None;

    while let Some(line) = LineReader::next_line(&mut cur) {
        if line.indent == 0 {
            if let Some((function, builder)) = open.take() {
                finished.push(function.with_body(builder.finish()));
            }
            let function = parse_header(&mut cur, &location)?;
            let builder = TreeBuilder::new(function.name.clone());
            open = Some((function, builder));
        } else {
            let start = cur.pos();
            let command = grammar::parse_command(&mut cur, &location)?;
            let node = CommandNode::new(command).at(location.range(start..cur.pos()));
            grammar::expect_line_end(&mut cur, &location)?;

            match open.as_mut() {
                Some((_, builder)) => builder.push(line.indent, node)?,
                None => {
                    let kind = node.command.kind();
                    return Err(unexpected_command(kind, "top level", node.location));
                }
            }
        }
    }

    if let Some((function, builder)) = open.take() {
        finished.push(function.with_body(builder.finish()));
    }
    Ok(finished)
}

/// Parse a definition header: a function name, then zero or more `$param`
/// declarations, each with an optional `= value` default.
fn parse_header(
    cur: &mut Cursor<'_>,
    location: &SourceLocation,
) -> ParseResult<FunctionDefinition> {
    let start = cur.pos();
    let Some(name) = take_match(cur, &FUNCTION_NAME) else {
        let range = location.range(cur.pos()..cur.pos() + cur.rest_of_line().len());
        return Err(unexpected_input(cur.rest_of_line(), range));
    };

    let mut parameters = Vec::new();
    loop {
        cur.skip_trivia();
        if cur.at_line_end() {
            break;
        }

        let param_start = cur.pos();
        let Some(param) = take_match(cur, &PARAMETER) else {
            let range = location.range(cur.pos()..cur.pos() + cur.rest_of_line().len());
            return Err(unexpected_input(cur.rest_of_line(), range));
        };

        cur.skip_spaces();
        let default = if cur.peek() == Some('=') {
            cur.bump();
            match crate::dryad::scanning::scan_value(cur, location)? {
                Some(value) => Some(value),
                None if cur.at_line_end() => {
                    return Err(incomplete_command(location.range(cur.pos()..cur.pos())))
                }
                None => {
                    let range = location.range(cur.pos()..cur.pos() + cur.rest_of_line().len());
                    return Err(unexpected_input(cur.rest_of_line(), range));
                }
            }
        } else {
            None
        };

        let mut declaration = ParameterDeclaration::new(param);
        declaration.default = default;
        parameters.push(declaration.at(location.range(param_start..cur.pos())));
    }

    Ok(FunctionDefinition::new(name)
        .with_parameters(parameters)
        .at(location.range(start..cur.pos())))
}
