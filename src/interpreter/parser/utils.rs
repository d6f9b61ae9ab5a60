use crate::{
    ast::Node,
    error::{Error, ResultExt},
    interpreter::{
        lexer::token::{Token, TokenKind},
        parser::core::{Cursor, ParseResult, process},
    },
    util::span::Span,
};

/// Fails if a processor that starts an expression was handed a left operand.
pub(in crate::interpreter::parser) fn reject_left(left: Option<&Node>,
                                                  token: &Token)
                                                  -> ParseResult<()> {
    match left {
        Some(node) => Err(Error::syntax(format!("{} cannot follow {}",
                                                token.kind,
                                                node.kind_name()),
                                        token.span)),
        None => Ok(()),
    }
}

/// Unwraps the left operand of an operator-like processor.
pub(in crate::interpreter::parser) fn require_left(left: Option<Node>,
                                                   token: &Token)
                                                   -> ParseResult<Node> {
    left.ok_or_else(|| {
            Error::syntax(format!("missing left operand for {} `{}`", token.kind, token.text),
                          token.span)
        })
}

/// Reduces the result of a sub-parse to exactly one node.
///
/// A sub-parse can produce more than one node (a declaration with an
/// initializer yields two); positions that hold a single expression reject
/// that.
pub(in crate::interpreter::parser) fn expect_single(nodes: Vec<Node>,
                                                    what: &str)
                                                    -> ParseResult<Node> {
    let mut nodes = nodes.into_iter();
    match (nodes.next(), nodes.next()) {
        (Some(node), None) => Ok(node),
        (Some(first), Some(second)) => {
            let count = nodes.len() + 2;
            Err(Error::syntax(format!("expected a single {what}, found {count} nodes"),
                              first.span.to(second.span)))
        },
        (None, _) => Err(Error::syntax(format!("expected {what}"), Span::default())),
    }
}

/// Parses one operand with a fresh dispatch, without a left node.
pub(in crate::interpreter::parser) fn parse_operand(cursor: &mut Cursor<'_>,
                                                    what: &str)
                                                    -> ParseResult<Node> {
    let nodes = process(cursor, None)?;
    expect_single(nodes, what)
}

/// Consumes the current token if it has kind `kind`.
///
/// # Errors
/// Returns a syntax error naming `expected` if the token has another kind or
/// the input has ended.
pub(in crate::interpreter::parser) fn expect_token<'t>(cursor: &mut Cursor<'t>,
                                                       kind: TokenKind,
                                                       expected: &str)
                                                       -> ParseResult<&'t Token> {
    match cursor.peek_current() {
        Some(token) if token.kind == kind => {
            cursor.advance();
            Ok(token)
        },
        Some(token) => {
            Err(Error::syntax(format!("expected {expected}, found {}", token.kind), token.span))
        },
        None => Err(Error::syntax(format!("expected {expected}, found end of input"),
                                  cursor.end_of_input())),
    }
}

/// Parses a comma-separated argument list up to the closing `)`.
///
/// The opening `(` has already been consumed. Each argument must reduce to a
/// single node, and after each argument the next token must be either `,` or
/// `)`. Line breaks between arguments are ignored, and a `)` right after a
/// comma closes the list.
///
/// Grammar (simplified): `arguments := (argument ("," argument)*)? ")"`
///
/// # Returns
/// The argument nodes and the span of the closing `)`.
///
/// # Errors
/// Returns a syntax error if:
/// - an argument fails to parse or yields more than one node,
/// - a separator other than `,` follows an argument,
/// - the input ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_arguments(cursor: &mut Cursor<'_>,
                                                      open: &Token)
                                                      -> ParseResult<(Vec<Node>, Span)> {
    let mut arguments = Vec::new();
    loop {
        cursor.skip_newlines();
        match cursor.peek_current() {
            Some(token) if token.kind == TokenKind::CloseParen => {
                cursor.advance();
                return Ok((arguments, token.span));
            },
            Some(_) => {},
            None => {
                return Err(Error::syntax("unclosed call, missing `)`", open.span));
            },
        }

        let position = arguments.len() + 1;
        let argument = parse_operand(cursor, "argument").with_context(|| {
                                                              format!("while parsing argument {position}")
                                                          })?;
        arguments.push(argument);

        cursor.skip_newlines();
        match cursor.peek_current() {
            Some(token) if token.kind == TokenKind::Comma => {
                cursor.advance();
            },
            Some(token) if token.kind == TokenKind::CloseParen => {
                cursor.advance();
                return Ok((arguments, token.span));
            },
            Some(token) => {
                return Err(Error::syntax(format!("expected `,` or `)` between arguments, found {}",
                                                 token.kind),
                                         token.span));
            },
            None => {
                return Err(Error::syntax("unclosed call, missing `)`", open.span));
            },
        }
    }
}
