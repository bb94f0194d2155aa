//! Control and binding commands: TEST, CHOOSE/WHEN/OTHERWISE, SET, CALL,
//! EACH, WITH

use dryad::dryad::testing::{
    array, call, call_full, choose, each, expression, member, object, otherwise, parse_error,
    parse_single, query, set, test_node, value_node, variable, when, with_node,
};
use dryad::{parse, Callee};

#[test]
fn test_test_with_condition() {
    assert_eq!(
        parse_single("TEST ($a > 1)").unwrap(),
        vec![test_node(expression("($a > 1)"))]
    );
}

#[test]
fn test_block_comments_between_tokens_are_skipped() {
    let source = "\
func
    TEST <.a.b.c> /* Comment */
    TEST /*Ololo*/ (false || true) // Haha
";
    let body = parse(source).unwrap().remove(0).body;
    assert_eq!(
        body,
        vec![
            test_node(query(".a.b.c")),
            test_node(expression("(false || true)")),
        ]
    );
}

#[test]
fn test_choose_with_arms() {
    let source = "\
func
    CHOOSE
        WHEN ($a)
            1
        WHEN ($b)
            2
        OTHERWISE
            3
";
    let body = parse(source).unwrap().remove(0).body;
    let expected = choose().with_children(vec![
        when(expression("($a)")).with_children(vec![value_node(expression("1"))]),
        when(expression("($b)")).with_children(vec![value_node(expression("2"))]),
        otherwise().with_children(vec![value_node(expression("3"))]),
    ]);
    assert_eq!(body, vec![expected]);
}

#[test]
fn test_choose_rejects_other_children() {
    let message = parse_error("func\n    CHOOSE\n        SET $a 1\n");
    assert_eq!(message, "SyntaxError: Unexpected command 'SET' inside 'CHOOSE'");
}

#[test]
fn test_when_outside_choose_rejected() {
    let message = parse_error("func\n    WHEN (1)\n");
    assert!(message.starts_with("SyntaxError: Unexpected command 'WHEN'"));
}

#[test]
fn test_set_inline_value() {
    assert_eq!(
        parse_single("SET $total (1 + 2)").unwrap(),
        vec![set("$total", Some(expression("(1 + 2)")))]
    );
}

#[test]
fn test_set_value_from_children() {
    let body = parse_single("SET $obj\n    {\"a\": 1}").unwrap();
    assert_eq!(
        body,
        vec![set("$obj", None).with_children(vec![value_node(object("{\"a\": 1}"))])]
    );
}

#[test]
fn test_call_bare() {
    assert_eq!(parse_single("CALL refresh").unwrap(), vec![call("refresh", vec![])]);
}

#[test]
fn test_call_hyphenated_name_with_everything() {
    let body = parse_single("CALL fetch-page $url 2 timeout=30 AS $page").unwrap();
    assert_eq!(
        body,
        vec![call_full(
            Callee::Function("fetch-page".to_string()),
            vec![variable("$url"), expression("2")],
            vec![("timeout", expression("30"))],
            Some("$page"),
        )]
    );
}

#[test]
fn test_call_named_argument_keeps_sigil_form() {
    let body = parse_single("CALL a-b-c arg1=1 AS $tmp").unwrap();
    assert_eq!(
        body,
        vec![call_full(
            Callee::Function("a-b-c".to_string()),
            vec![],
            vec![("$arg1", expression("1"))],
            Some("$tmp"),
        )]
    );
}

#[test]
fn test_call_callee_may_be_a_value() {
    let body = parse_single("CALL $handlers.on_load $payload").unwrap();
    assert_eq!(
        body,
        vec![call_full(
            Callee::Value(member("$handlers.on_load", "$handlers")),
            vec![variable("$payload")],
            vec![],
            None,
        )]
    );
}

#[test]
fn test_call_as_is_a_function_name_in_callee_position() {
    let body = parse_single("CALL AS $p1").unwrap();
    assert_eq!(
        body,
        vec![call_full(
            Callee::Function("AS".to_string()),
            vec![variable("$p1")],
            vec![],
            None,
        )]
    );
}

#[test]
fn test_call_variable_with_equals_is_rejected() {
    assert_eq!(
        parse_error("func\n    CALL f $a=1 $b=2 $c\n"),
        "SyntaxError: Incorrect input '=1 $b=2 $c'"
    );
}

#[test]
fn test_call_result_clause_must_close_the_line() {
    assert_eq!(
        parse_error("func\n    CALL f AS $x 1\n"),
        "SyntaxError: Incorrect input '1'"
    );
    assert_eq!(
        parse_error("func\n    CALL f AS\n"),
        "SyntaxError: Incomplete command"
    );
}

#[test]
fn test_each_source_only() {
    assert_eq!(
        parse_single("EACH $items").unwrap(),
        vec![each(None, None, variable("$items"))]
    );
}

#[test]
fn test_each_value_binding() {
    assert_eq!(
        parse_single("EACH $item $doc.books").unwrap(),
        vec![each(None, Some("$item"), member("$doc.books", "$doc"))]
    );
}

#[test]
fn test_each_key_and_value_bindings() {
    assert_eq!(
        parse_single("EACH $idx $item [1, 2, 3]").unwrap(),
        vec![each(Some("$idx"), Some("$item"), array("[1, 2, 3]"))]
    );
}

#[test]
fn test_each_without_source_is_incomplete() {
    assert_eq!(
        parse_error("func\n    EACH\n"),
        "SyntaxError: Incomplete command"
    );
}

#[test]
fn test_with_rescopes_a_block() {
    let source = "\
func
    WITH $doc.settings
        SET $mode $item
";
    let body = parse(source).unwrap().remove(0).body;
    assert_eq!(
        body,
        vec![with_node(member("$doc.settings", "$doc"))
            .with_children(vec![set("$mode", Some(variable("$item")))])]
    );
}

#[test]
fn test_sibling_indentation_must_match() {
    // the body indent is fixed at 4 by the first line; 2 is not a sibling
    let source = "\
func
    SET $a 1
  SET $b 2
";
    let message = parse_error(source);
    assert_eq!(message, "SyntaxError: Unexpected command 'SET' inside 'func'");
}

#[test]
fn test_partial_dedent_inside_a_block() {
    let source = "\
func
    CHOOSE
        WHEN (1)
            1
      WHEN (2)
";
    let message = parse_error(source);
    assert_eq!(
        message,
        "SyntaxError: Unexpected command 'WHEN' inside 'CHOOSE'"
    );
}
