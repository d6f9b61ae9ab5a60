use crate::{
    ast::{Node, NodeKind, Parameter},
    error::{Error, ResultExt},
    interpreter::{
        lexer::token::{AttributeKey, TokenKind},
        parser::{
            binary::process_assignment,
            core::{Cursor, ParseResult, process},
            utils::{expect_single, expect_token, parse_operand, reject_left},
        },
    },
};

/// Parses a variable declaration.
///
/// `var name` produces a single `VariableDeclaration`. With an initializer,
/// `var name = value` produces two sibling nodes: the declaration and an
/// assignment whose target is a reference to the declared name.
///
/// # Errors
/// Returns a syntax error if the name is missing or the initializer fails to
/// parse.
pub fn process_variable_declaration(cursor: &mut Cursor<'_>,
                                    left: Option<Node>)
                                    -> ParseResult<Vec<Node>> {
    let Some(keyword) = cursor.advance() else {
        return Err(Error::syntax("expected `var`", cursor.end_of_input()));
    };
    reject_left(left.as_ref(), keyword)?;

    let name = expect_token(cursor, TokenKind::Identifier, "a variable name after `var`")?;
    let declaration = Node::new(NodeKind::VariableDeclaration { name: name.text.clone() },
                                keyword.span.to(name.span));

    if !cursor.at(TokenKind::Assign) {
        return Ok(vec![declaration]);
    }

    let target = Node::new(NodeKind::Reference { name: name.text.clone() }, name.span);
    let assignment =
        process_assignment(cursor, Some(target)).with_context(|| {
                                                     format!("while parsing the declaration of `{}`",
                                                             name.text)
                                                 })?;

    let mut nodes = vec![declaration];
    nodes.extend(assignment);
    Ok(nodes)
}

/// Parses a function from its declaration header and body block.
///
/// The header token carries the name and the parameters as attributes; the
/// body must parse to exactly one `Block`. Line breaks between the header and
/// the body are allowed.
pub fn process_function(cursor: &mut Cursor<'_>, left: Option<Node>) -> ParseResult<Vec<Node>> {
    let Some(header) = cursor.advance() else {
        return Err(Error::syntax("expected a function declaration", cursor.end_of_input()));
    };
    reject_left(left.as_ref(), header)?;

    let name = header.attribute(AttributeKey::Name)
                     .map(|a| a.value.clone())
                     .ok_or_else(|| Error::syntax("function declaration without a name", header.span))?;
    let parameters = header.attributes(AttributeKey::Parameter)
                           .map(|a| Parameter { name: a.value.clone(),
                                                span: a.span, })
                           .collect();

    cursor.skip_newlines();
    let body = match cursor.peek_current() {
        Some(token) if token.kind == TokenKind::OpenBlock => {
            let nodes = process(cursor, None).with_context(|| format!("while parsing function `{name}`"))?;
            expect_single(nodes, "function body")?
        },
        Some(token) => {
            return Err(Error::syntax(format!("expected `{{` to open the body of `{name}`, found {}",
                                             token.kind),
                                     token.span));
        },
        None => {
            return Err(Error::syntax(format!("expected the body of `{name}`, found end of input"),
                                     cursor.end_of_input()));
        },
    };

    if !matches!(body.kind, NodeKind::Block { .. }) {
        return Err(Error::syntax(format!("the body of `{name}` must be a block"), body.span));
    }

    let span = header.span.to(body.span);
    Ok(vec![Node::new(NodeKind::Function { name,
                                           parameters,
                                           body: Box::new(body) },
                      span)])
}

/// Parses `return` with an optional value.
///
/// The value is absent when the keyword is followed by a separator, a closing
/// `}` or the end of input.
pub fn process_return(cursor: &mut Cursor<'_>, left: Option<Node>) -> ParseResult<Vec<Node>> {
    let Some(keyword) = cursor.advance() else {
        return Err(Error::syntax("expected `return`", cursor.end_of_input()));
    };
    reject_left(left.as_ref(), keyword)?;

    let has_value = cursor.current_kind()
                          .is_some_and(|k| !k.is_separator() && k != TokenKind::CloseBlock);
    if !has_value {
        return Ok(vec![Node::new(NodeKind::Return { value: None }, keyword.span)]);
    }

    let value = parse_operand(cursor, "return value").context("while parsing `return`")?;
    let span = keyword.span.to(value.span);
    Ok(vec![Node::new(NodeKind::Return { value: Some(Box::new(value)) }, span)])
}
