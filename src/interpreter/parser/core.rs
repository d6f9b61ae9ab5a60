use crate::{
    ast::{Node, NodeKind},
    error::{Error, Result},
    interpreter::{
        lexer::token::{Token, TokenKind},
        parser::{binary, block, literal, postfix, statement},
    },
    util::{span::Span, stack::ensure_sufficient_stack},
};

pub type ParseResult<T> = Result<T>;

/// A forward cursor over the token sequence.
///
/// The cursor is shared by every processor of one parse; whatever a processor
/// consumes stays consumed.
#[derive(Debug, Clone)]
pub struct Cursor<'t> {
    tokens:   &'t [Token],
    position: usize,
}

impl<'t> Cursor<'t> {
    #[must_use]
    pub const fn new(tokens: &'t [Token]) -> Self {
        Self { tokens,
               position: 0 }
    }

    /// The token at the cursor, if any.
    #[must_use]
    pub fn peek_current(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    /// The token after the one at the cursor, if any.
    #[must_use]
    pub fn peek_next(&self) -> Option<&'t Token> {
        self.tokens.get(self.position + 1)
    }

    /// Moves past the current token and returns it.
    pub fn advance(&mut self) -> Option<&'t Token> {
        let token = self.peek_current();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Kind of the current token.
    #[must_use]
    pub fn current_kind(&self) -> Option<TokenKind> {
        self.peek_current().map(|t| t.kind)
    }

    /// Whether the current token has kind `kind`.
    #[must_use]
    pub fn at(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Skips line breaks.
    pub fn skip_newlines(&mut self) {
        while self.at(TokenKind::NewLine) {
            self.advance();
        }
    }

    /// Skips line breaks and semicolons.
    pub fn skip_separators(&mut self) {
        while self.current_kind().is_some_and(TokenKind::is_separator) {
            self.advance();
        }
    }

    /// An empty span just past the last token.
    #[must_use]
    pub fn end_of_input(&self) -> Span {
        Span::point(self.tokens.last().map_or(0, |t| t.span.end))
    }
}

/// Builds the root node of a program.
///
/// Top-level statements are parsed one after another, separators between
/// them are skipped.
///
/// # Errors
/// Returns the first syntax error encountered; nothing is recovered.
///
/// # Example
/// ```
/// use sprig::{
///     ast::NodeKind,
///     interpreter::{lexer::scanner::scan_str, parser::build},
/// };
///
/// let tokens = scan_str("var a = 5; print(a)").unwrap();
/// let root = build(&tokens).unwrap();
///
/// let NodeKind::Root { body } = &root.kind else { panic!("expected root") };
/// let kinds: Vec<_> = body.iter().map(|n| n.kind_name()).collect();
/// assert_eq!(kinds, vec!["VariableDeclaration", "Assignment", "CallExpression"]);
/// ```
pub fn build(tokens: &[Token]) -> ParseResult<Node> {
    let mut cursor = Cursor::new(tokens);
    let mut body = Vec::new();

    cursor.skip_separators();
    while cursor.peek_current().is_some() {
        body.extend(process(&mut cursor, None)?);
        cursor.skip_separators();
    }

    tracing::debug!(statements = body.len(), "built syntax tree");
    let span = Span::new(0, cursor.end_of_input().end);
    Ok(Node::new(NodeKind::Root { body }, span))
}

/// Dispatches the current token to the processor registered for its kind.
///
/// `left` is the already built node the processor should splice in as its left
/// operand, if any. Processors that need no left operand reject one, and
/// operator-like processors reject its absence.
///
/// # Errors
/// Returns a syntax error at end of input, on tokens that cannot start or
/// continue an expression, and whatever the selected processor reports.
pub fn process(cursor: &mut Cursor<'_>, left: Option<Node>) -> ParseResult<Vec<Node>> {
    ensure_sufficient_stack(|| dispatch(cursor, left))
}

fn dispatch(cursor: &mut Cursor<'_>, left: Option<Node>) -> ParseResult<Vec<Node>> {
    let Some(token) = cursor.peek_current() else {
        return Err(Error::syntax("unexpected end of input", cursor.end_of_input()));
    };
    tracing::trace!(kind = ?token.kind, chained = left.is_some(), "dispatch");

    match token.kind {
        TokenKind::Identifier => literal::process_reference(cursor, left),
        TokenKind::Number => literal::process_number(cursor, left),
        TokenKind::String => literal::process_string(cursor, left),
        TokenKind::Boolean => literal::process_boolean(cursor, left),
        TokenKind::Assign => binary::process_assignment(cursor, left),
        TokenKind::Operator => binary::process_binary(cursor, left),
        TokenKind::OpenParen => postfix::process_open_paren(cursor, left),
        TokenKind::Dot => postfix::process_read_property(cursor, left),
        TokenKind::OpenBlock => block::process_block(cursor, left),
        TokenKind::VariableDeclaration => statement::process_variable_declaration(cursor, left),
        TokenKind::FunctionDeclaration => statement::process_function(cursor, left),
        TokenKind::Return => statement::process_return(cursor, left),
        TokenKind::NewLine
        | TokenKind::Semicolon
        | TokenKind::CloseBlock
        | TokenKind::CloseParen
        | TokenKind::Comma => {
            Err(Error::syntax(format!("unexpected {}", token.kind), token.span))
        },
    }
}

/// Continues a finished node into a larger expression.
///
/// If the current token is a continuation (`=`, an operator, `(` or `.`), the
/// dispatcher is invoked again with `node` as the left operand. Otherwise
/// `node` is the complete result for this position.
pub(in crate::interpreter::parser) fn chain(cursor: &mut Cursor<'_>,
                                            node: Node)
                                            -> ParseResult<Vec<Node>> {
    match cursor.peek_current() {
        Some(token) if token.kind.is_continuation() => process(cursor, Some(node)),
        _ => Ok(vec![node]),
    }
}
