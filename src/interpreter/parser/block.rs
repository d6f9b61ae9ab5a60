use crate::{
    ast::{Node, NodeKind},
    error::Error,
    interpreter::{
        lexer::token::TokenKind,
        parser::{
            core::{Cursor, ParseResult, process},
            utils::reject_left,
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements, optionally separated by
/// newlines or semicolons. Parsing continues until the matching `}`; running
/// out of tokens first is an error pointing at the opening brace.
///
/// Grammar: `block := "{" statement* "}"`
///
/// The resulting node is returned as `NodeKind::Block { body }`. Blocks are
/// not chain-eligible.
pub fn process_block(cursor: &mut Cursor<'_>, left: Option<Node>) -> ParseResult<Vec<Node>> {
    let Some(open) = cursor.advance() else {
        return Err(Error::syntax("expected `{`", cursor.end_of_input()));
    };
    reject_left(left.as_ref(), open)?;

    let mut body = Vec::new();
    let close = loop {
        cursor.skip_separators();
        match cursor.peek_current() {
            Some(token) if token.kind == TokenKind::CloseBlock => {
                cursor.advance();
                break token;
            },
            Some(_) => {
                let nodes = process(cursor, None).map_err(|e| e.context("while parsing block"))?;
                body.extend(nodes);
            },
            None => {
                return Err(Error::syntax("unclosed block, missing `}`", open.span));
            },
        }
    };

    Ok(vec![Node::new(NodeKind::Block { body }, open.span.to(close.span))])
}
