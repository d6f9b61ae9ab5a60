use pretty_assertions::assert_eq;
use sprig::{
    ast::{BinaryOperator, Node, NodeKind},
    error::ErrorKind,
    interpreter::{
        lexer::{scanner::scan_str, token::TokenKind},
        parser::{Cursor, build},
    },
    util::span::Span,
};

fn parse(src: &str) -> Node {
    let tokens = scan_str(src).unwrap_or_else(|e| panic!("scan failed: {e}"));
    build(&tokens).unwrap_or_else(|e| panic!("build failed: {:?}", e.chain().collect::<Vec<_>>()))
}

fn body(src: &str) -> Vec<Node> {
    let root = parse(src);
    match &root.kind {
        NodeKind::Root { body } => body.clone(),
        other => panic!("expected a root, found {other:?}"),
    }
}

fn syntax_error(src: &str) -> Vec<String> {
    let tokens = scan_str(src).unwrap_or_else(|e| panic!("scan failed: {e}"));
    let error = build(&tokens).expect_err("expected a syntax error");
    assert_eq!(error.kind, ErrorKind::Syntax);
    error.chain().map(str::to_string).collect()
}

#[test]
fn declaration_with_initializer_yields_two_siblings() {
    let root = parse("var a = 5");
    assert_eq!(root.dump(),
               "Root @0..9\n  VariableDeclaration name=\"a\" @0..5\n  Assignment @4..9\n    Reference \
                name=\"a\" @4..5\n    Number value=5 @8..9\n");
}

#[test]
fn operators_group_to_the_right() {
    let nodes = body("a - b - c");
    let NodeKind::BinaryExpression { operator, left, right } = &nodes[0].kind else {
        panic!("expected a binary expression");
    };

    assert_eq!(*operator, BinaryOperator::Sub);
    assert_eq!(left.kind, NodeKind::Reference { name: "a".into() });
    assert!(matches!(right.kind, NodeKind::BinaryExpression { operator: BinaryOperator::Sub, .. }));
    assert_eq!(nodes[0].span, Span::new(0, 9));
}

#[test]
fn parentheses_group_explicitly() {
    let nodes = body("(a - b) - c");
    let NodeKind::BinaryExpression { left, right, .. } = &nodes[0].kind else {
        panic!("expected a binary expression");
    };
    assert!(matches!(left.kind, NodeKind::ParenthesizedExpression { .. }));
    assert_eq!(right.kind, NodeKind::Reference { name: "c".into() });
}

#[test]
fn calls_chain_onto_call_results() {
    let nodes = body("sum(5)(8)");
    let NodeKind::CallExpression { callee, arguments } = &nodes[0].kind else {
        panic!("expected a call");
    };

    assert_eq!(arguments.len(), 1);
    assert_eq!(arguments[0].kind, NodeKind::Number(8.0));
    assert!(matches!(callee.kind, NodeKind::CallExpression { .. }));
    assert_eq!(nodes[0].span, Span::new(0, 9));
}

#[test]
fn property_reads_chain() {
    let nodes = body("a.b.c");
    let NodeKind::ReadProperty { object, property } = &nodes[0].kind else {
        panic!("expected a property read");
    };
    assert_eq!(property, "c");
    assert!(matches!(&object.kind, NodeKind::ReadProperty { property, .. } if property == "b"));
}

#[test]
fn function_nodes_carry_parameters_and_body() {
    let nodes = body("function add(a, b) {\n  return a + b\n}");
    let NodeKind::Function { name, parameters, body } = &nodes[0].kind else {
        panic!("expected a function");
    };

    assert_eq!(name, "add");
    let names: Vec<_> = parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);

    let NodeKind::Block { body } = &body.kind else {
        panic!("expected a block body");
    };
    assert!(matches!(&body[0].kind, NodeKind::Return { value: Some(_) }));
}

#[test]
fn function_body_may_start_on_the_next_line() {
    let nodes = body("function f()\n{\n}");
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].kind_name(), "Function");
}

#[test]
fn return_without_value() {
    let nodes = body("function f() { return }");
    let NodeKind::Function { body, .. } = &nodes[0].kind else {
        panic!("expected a function");
    };
    assert_eq!(body.children()[0].kind, NodeKind::Return { value: None });
}

#[test]
fn separators_are_optional_between_statements() {
    let kinds: Vec<_> = body("var a\n\n;var b; a = 1\nb = a")
        .iter()
        .map(Node::kind_name)
        .collect();
    assert_eq!(kinds,
               vec!["VariableDeclaration", "VariableDeclaration", "Assignment", "Assignment"]);
}

#[test]
fn booleans_do_not_continue_into_operators() {
    let chain = syntax_error("var t = true + 1");
    assert!(chain.last().is_some_and(|m| m.contains("missing left operand for operator `+`")));
}

#[test]
fn literals_cannot_follow_each_other_in_arguments() {
    let chain = syntax_error("print(1 2)");
    assert_eq!(chain,
               vec!["while parsing the arguments of a call to `print`",
                    "expected `,` or `)` between arguments, found number literal"]);
}

#[test]
fn declarations_are_not_expressions() {
    let chain = syntax_error("print(var a = 1)");
    assert!(chain.iter().any(|m| m.contains("expected a single argument, found 2 nodes")));
}

#[test]
fn unclosed_constructs_are_reported() {
    assert!(syntax_error("{ var a").last().is_some_and(|m| m == "unclosed block, missing `}`"));
    assert!(syntax_error("print(1,").last().is_some_and(|m| m == "unclosed call, missing `)`"));
    assert!(syntax_error("(1 + 2").last().is_some_and(|m| m.contains("expected `)`")));
}

#[test]
fn stray_tokens_are_reported() {
    assert_eq!(syntax_error("}"), vec!["unexpected `}`"]);
    assert_eq!(syntax_error("var a ="), vec!["while parsing the declaration of `a`",
                                             "while parsing the assigned value",
                                             "unexpected end of input"]);
    assert!(syntax_error("a.1").last().is_some_and(|m| m.contains("a property name")));
}

#[test]
fn function_needs_a_block_body() {
    let chain = syntax_error("function f() print(1)");
    assert!(chain.last().is_some_and(|m| m.contains("expected `{` to open the body of `f`")));
}

#[test]
fn cursor_peeks_without_consuming() {
    let tokens = scan_str("a = 1").unwrap();
    let mut cursor = Cursor::new(&tokens);

    assert_eq!(cursor.peek_current().map(|t| t.kind), Some(TokenKind::Identifier));
    assert_eq!(cursor.peek_next().map(|t| t.kind), Some(TokenKind::Assign));

    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.advance().map(|t| t.text.as_str()), Some("1"));
    assert!(cursor.peek_current().is_none());
    assert_eq!(cursor.end_of_input(), Span::point(5));
}

#[test]
fn trailing_comma_closes_the_argument_list() {
    let nodes = body("print(1,\n 2,\n)");
    let NodeKind::CallExpression { arguments, .. } = &nodes[0].kind else {
        panic!("expected a call");
    };
    assert_eq!(arguments.len(), 2);
}
