use crate::{
    ast::{Node, NodeKind},
    error::{Error, ResultExt},
    interpreter::{
        lexer::token::TokenKind,
        parser::{
            core::{Cursor, ParseResult, chain},
            utils::{expect_token, parse_arguments, parse_operand, require_left},
        },
    },
};

/// Handles `(`: a call when there is a left node, a parenthesized expression
/// otherwise.
pub fn process_open_paren(cursor: &mut Cursor<'_>, left: Option<Node>) -> ParseResult<Vec<Node>> {
    match left {
        Some(callee) => process_call(cursor, callee),
        None => process_parenthesized(cursor),
    }
}

/// Builds a `CallExpression` calling `callee`.
///
/// Calls are chain-eligible, so `f(1)(2)` calls the result of `f(1)`.
fn process_call(cursor: &mut Cursor<'_>, callee: Node) -> ParseResult<Vec<Node>> {
    let Some(open) = cursor.advance() else {
        return Err(Error::syntax("expected `(`", cursor.end_of_input()));
    };

    let (arguments, close) = parse_arguments(cursor, open).with_context(|| {
                                                               format!("while parsing the arguments of a call to {}",
                                                                       describe_callee(&callee))
                                                           })?;

    let span = callee.span.to(close);
    let node = Node::new(NodeKind::CallExpression { callee: Box::new(callee),
                                                    arguments },
                         span);
    chain(cursor, node)
}

/// Builds a `ParenthesizedExpression`. The result is chain-eligible.
fn process_parenthesized(cursor: &mut Cursor<'_>) -> ParseResult<Vec<Node>> {
    let Some(open) = cursor.advance() else {
        return Err(Error::syntax("expected `(`", cursor.end_of_input()));
    };

    cursor.skip_newlines();
    let inner = parse_operand(cursor, "expression").context("while parsing parentheses")?;
    cursor.skip_newlines();
    let close = expect_token(cursor, TokenKind::CloseParen, "`)`").context("while parsing parentheses")?;

    let node = Node::new(NodeKind::ParenthesizedExpression { inner: Box::new(inner) },
                         open.span.to(close.span));
    chain(cursor, node)
}

/// Builds a `ReadProperty` node reading a property of `left`.
///
/// The property name must follow the `.` directly. Property reads are
/// chain-eligible.
pub fn process_read_property(cursor: &mut Cursor<'_>,
                             left: Option<Node>)
                             -> ParseResult<Vec<Node>> {
    let Some(dot) = cursor.advance() else {
        return Err(Error::syntax("expected `.`", cursor.end_of_input()));
    };
    let object = require_left(left, dot)?;

    let property = expect_token(cursor, TokenKind::Identifier, "a property name after `.`")?;

    let span = object.span.to(property.span);
    let node = Node::new(NodeKind::ReadProperty { object:   Box::new(object),
                                                  property: property.text.clone(), },
                         span);
    chain(cursor, node)
}

fn describe_callee(callee: &Node) -> String {
    match &callee.kind {
        NodeKind::Reference { name } => format!("`{name}`"),
        _ => callee.kind_name().to_string(),
    }
}
