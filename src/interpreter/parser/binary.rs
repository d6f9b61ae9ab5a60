use crate::{
    ast::{BinaryOperator, Node, NodeKind},
    error::{Error, ResultExt},
    interpreter::parser::{
        core::{Cursor, ParseResult},
        utils::{parse_operand, require_left},
    },
};

/// Builds an `Assignment` node with `left` as its target.
///
/// The value is parsed with a fresh dispatch, so `a = b = 1` assigns `b = 1`
/// first and then `a`. Whether the target is assignable is checked when the
/// tree is evaluated.
pub fn process_assignment(cursor: &mut Cursor<'_>,
                          left: Option<Node>)
                          -> ParseResult<Vec<Node>> {
    let Some(token) = cursor.advance() else {
        return Err(Error::syntax("expected `=`", cursor.end_of_input()));
    };
    let target = require_left(left, token)?;

    let value = parse_operand(cursor, "value").context("while parsing the assigned value")?;

    let span = target.span.to(value.span);
    Ok(vec![Node::new(NodeKind::Assignment { target: Box::new(target),
                                             value:  Box::new(value), },
                      span)])
}

/// Builds a `BinaryExpression` node with `left` as its left operand.
///
/// There is no precedence table. The right operand is parsed with a fresh
/// dispatch and may itself continue into further operators before control
/// returns here, so `a - b - c` builds `a - (b - c)` and `a * b + c` builds
/// `a * (b + c)`.
pub fn process_binary(cursor: &mut Cursor<'_>, left: Option<Node>) -> ParseResult<Vec<Node>> {
    let Some(token) = cursor.advance() else {
        return Err(Error::syntax("expected an operator", cursor.end_of_input()));
    };
    let left = require_left(left, token)?;

    let operator = BinaryOperator::from_symbol(&token.text).ok_or_else(|| {
                       Error::syntax(format!("unknown operator `{}`", token.text), token.span)
                   })?;

    let right = parse_operand(cursor, "operand").with_context(|| {
                                                     format!("while parsing the right operand of `{operator}`")
                                                 })?;

    let span = left.span.to(right.span);
    Ok(vec![Node::new(NodeKind::BinaryExpression { operator,
                                                   left: Box::new(left),
                                                   right: Box::new(right) },
                      span)])
}
