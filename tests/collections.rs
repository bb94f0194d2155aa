//! Collection bodies: ITEM under arrays and calls, KEYVAL/KEY/VAL under
//! objects

use dryad::dryad::testing::{
    array, call, expression, item, key, keyval, object, parse_error, test_node, val, value_node,
    variable,
};
use dryad::parse;

fn body(source: &str) -> Vec<dryad::CommandNode> {
    parse(source).unwrap().remove(0).body
}

#[test]
fn test_array_built_from_items() {
    let source = "\
func
    []
        ITEM 1
        ITEM
            'two'
";
    assert_eq!(
        body(source),
        vec![value_node(array("[]")).with_children(vec![
            item(Some(expression("1"))),
            item(None).with_children(vec![value_node(expression("'two'"))]),
        ])]
    );
}

#[test]
fn test_item_outside_array_rejected() {
    let message = parse_error("func\n    ITEM 1\n");
    assert_eq!(message, "SyntaxError: Unexpected command 'ITEM' inside 'func'");
}

#[test]
fn test_item_under_call() {
    let source = "\
func
    CALL combine
        ITEM $a
        ITEM $b
";
    assert_eq!(
        body(source),
        vec![call("combine", vec![]).with_children(vec![
            item(Some(variable("$a"))),
            item(Some(variable("$b"))),
        ])]
    );
}

#[test]
fn test_keyval_inline_pair() {
    let source = "\
func
    {}
        KEYVAL 'name' 'dryad'
";
    assert_eq!(
        body(source),
        vec![value_node(object("{}")).with_children(vec![keyval(
            Some(expression("'name'")),
            Some(expression("'dryad'")),
        )])]
    );
}

#[test]
fn test_keyval_key_only_then_val_child() {
    let source = "\
func
    {}
        KEYVAL 'name'
            VAL 'dryad'
";
    assert_eq!(
        body(source),
        vec![value_node(object("{}")).with_children(vec![keyval(
            Some(expression("'name'")),
            None,
        )
        .with_children(vec![val(Some(expression("'dryad'")))])])]
    );
}

#[test]
fn test_keyval_fields_from_children() {
    let source = "\
func
    {}
        KEYVAL
            KEY 'name'
            VAL
                'dryad'
";
    assert_eq!(
        body(source),
        vec![value_node(object("{}")).with_children(vec![keyval(None, None)
            .with_children(vec![
                key(Some(expression("'name'"))),
                val(None).with_children(vec![value_node(expression("'dryad'"))]),
            ])])]
    );
}

#[test]
fn test_keyval_outside_object_rejected() {
    let message = parse_error("func\n    CALL f\n        KEYVAL 'a' 1\n");
    assert_eq!(
        message,
        "SyntaxError: Unexpected command 'KEYVAL' inside 'CALL'"
    );
}

#[test]
fn test_duplicate_key_child_rejected() {
    let source = "\
func
    {}
        KEYVAL
            KEY 'a'
            KEY 'b'
";
    assert_eq!(
        parse_error(source),
        "SyntaxError: Unexpected command 'KEY' inside 'KEYVAL'"
    );
}

#[test]
fn test_key_child_rejected_when_inline_key_present() {
    let source = "\
func
    {}
        KEYVAL 'a'
            KEY 'b'
";
    assert_eq!(
        parse_error(source),
        "SyntaxError: Unexpected command 'KEY' inside 'KEYVAL'"
    );
}

#[test]
fn test_key_and_val_only_under_keyval() {
    let message = parse_error("func\n    KEY 'a'\n");
    assert_eq!(message, "SyntaxError: Unexpected command 'KEY' inside 'func'");
}

#[test]
fn test_test_is_transparent_inside_collections() {
    let source = "\
func
    []
        TEST ($include)
            ITEM 1
";
    assert_eq!(
        body(source),
        vec![value_node(array("[]")).with_children(vec![test_node(
            expression("($include)"),
        )
        .with_children(vec![item(Some(expression("1")))])])]
    );
}

#[test]
fn test_scalar_values_host_no_children() {
    let message = parse_error("func\n    42\n        ITEM 1\n");
    assert_eq!(message, "SyntaxError: Unexpected command 'ITEM' inside 'value'");
}
