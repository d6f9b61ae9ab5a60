use crate::{
    ast::{Node, NodeKind},
    error::Error,
    interpreter::parser::{
        core::{Cursor, ParseResult, chain},
        utils::reject_left,
    },
    util::num::parse_literal,
};

/// Builds a `Reference` node from an identifier.
///
/// References are chain-eligible: `a = 1`, `a + 1`, `a(1)` and `a.b` all start
/// here and continue through [`chain`].
pub fn process_reference(cursor: &mut Cursor<'_>, left: Option<Node>) -> ParseResult<Vec<Node>> {
    let Some(token) = cursor.advance() else {
        return Err(Error::syntax("expected an identifier", cursor.end_of_input()));
    };
    reject_left(left.as_ref(), token)?;

    let node = Node::new(NodeKind::Reference { name: token.text.clone() }, token.span);
    chain(cursor, node)
}

/// Builds a `Number` node. Numbers are chain-eligible.
pub fn process_number(cursor: &mut Cursor<'_>, left: Option<Node>) -> ParseResult<Vec<Node>> {
    let Some(token) = cursor.advance() else {
        return Err(Error::syntax("expected a number", cursor.end_of_input()));
    };
    reject_left(left.as_ref(), token)?;

    let value = parse_literal(&token.text).ok_or_else(|| {
                    Error::syntax(format!("invalid number literal `{}`", token.text), token.span)
                })?;
    chain(cursor, Node::new(NodeKind::Number(value), token.span))
}

/// Builds a `String` node. Strings are chain-eligible.
pub fn process_string(cursor: &mut Cursor<'_>, left: Option<Node>) -> ParseResult<Vec<Node>> {
    let Some(token) = cursor.advance() else {
        return Err(Error::syntax("expected a string", cursor.end_of_input()));
    };
    reject_left(left.as_ref(), token)?;

    chain(cursor, Node::new(NodeKind::String(token.text.clone()), token.span))
}

/// Builds a `Boolean` node.
///
/// Unlike the other literals, booleans never continue into a larger
/// expression: `true + x` leaves `+` without a left operand.
pub fn process_boolean(cursor: &mut Cursor<'_>, left: Option<Node>) -> ParseResult<Vec<Node>> {
    let Some(token) = cursor.advance() else {
        return Err(Error::syntax("expected a boolean", cursor.end_of_input()));
    };
    reject_left(left.as_ref(), token)?;

    let value = token.text == "true";
    Ok(vec![Node::new(NodeKind::Boolean(value), token.span)])
}
