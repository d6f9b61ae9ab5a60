use logos::{Lexer, Logos};

use crate::{
    error::{Error, Result},
    interpreter::lexer::{
        RawToken,
        token::{Attribute, AttributeKey, Token, TokenKind},
    },
    io::CharSource,
    util::span::Span,
};

/// Scans a character source into tokens.
///
/// The source is drained first; spans in the result are byte offsets into the
/// drained text.
///
/// # Errors
/// Returns a lexical [`Error`] for illegal characters, unterminated strings,
/// numbers running into letters and malformed function headers.
pub fn scan(mut source: impl CharSource) -> Result<Vec<Token>> {
    let text = source.read_all();
    scan_str(&text)
}

/// Scans program text into tokens.
///
/// # Errors
/// See [`scan`].
///
/// # Example
/// ```
/// use sprig::interpreter::lexer::{scanner::scan_str, token::TokenKind};
///
/// let tokens = scan_str("var a = 5;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::VariableDeclaration,
///                 TokenKind::Identifier,
///                 TokenKind::Assign,
///                 TokenKind::Number,
///                 TokenKind::Semicolon]);
/// ```
pub fn scan_str(text: &str) -> Result<Vec<Token>> {
    let mut lexer = RawToken::lexer(text);
    let mut tokens = Vec::new();

    while let Some(raw) = lexer.next() {
        let span = Span::from(lexer.span());
        let slice = lexer.slice();
        let raw = raw.map_err(|()| unrecognised(slice, span))?;

        let token = match raw {
            RawToken::Function => scan_function_header(&mut lexer, span)?,
            RawToken::Return => Token::new(TokenKind::Return, slice, span),
            RawToken::Var => Token::new(TokenKind::VariableDeclaration, slice, span),
            RawToken::Bool => Token::new(TokenKind::Boolean, slice, span),
            RawToken::DoubleQuoted | RawToken::SingleQuoted => {
                let content = slice.get(1..slice.len() - 1).unwrap_or_default();
                Token::new(TokenKind::String, content, span)
            },
            RawToken::Number => Token::new(TokenKind::Number, slice, span),
            RawToken::NumberIntoWord => {
                return Err(Error::lexical(format!("identifiers must not start with a digit: `{slice}`"),
                                          span));
            },
            RawToken::WordIntoNumber => return Err(digits_in_identifier(slice, span)),
            RawToken::Word => Token::new(TokenKind::Identifier, slice, span),
            RawToken::NewLine => Token::new(TokenKind::NewLine, slice, span),
            RawToken::Equals => Token::new(TokenKind::Assign, slice, span),
            RawToken::LBrace => Token::new(TokenKind::OpenBlock, slice, span),
            RawToken::RBrace => Token::new(TokenKind::CloseBlock, slice, span),
            RawToken::LParen => Token::new(TokenKind::OpenParen, slice, span),
            RawToken::RParen => Token::new(TokenKind::CloseParen, slice, span),
            RawToken::Semicolon => Token::new(TokenKind::Semicolon, slice, span),
            RawToken::Comma => Token::new(TokenKind::Comma, slice, span),
            RawToken::Dot => Token::new(TokenKind::Dot, slice, span),
            RawToken::Operator => Token::new(TokenKind::Operator, slice, span),
            RawToken::Ignored => continue,
        };

        tracing::trace!(kind = ?token.kind, text = %token.text, "token");
        tokens.push(token);
    }

    tracing::debug!(count = tokens.len(), "scanned source");
    Ok(tokens)
}

/// Builds the error for text no raw lexeme matches.
fn unrecognised(slice: &str, span: Span) -> Error {
    match slice.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            Error::lexical(format!("unterminated string literal, missing closing {quote}"), span)
        },
        Some(c) => Error::lexical(format!("illegal character `{c}`"), span),
        None => Error::lexical("unexpected end of input", span),
    }
}

fn digits_in_identifier(slice: &str, span: Span) -> Error {
    Error::lexical(format!("identifiers must not contain digits: `{slice}`"), span)
}

/// What the function header scanner expects next.
#[derive(Clone, Copy, PartialEq, Eq)]
enum HeaderState {
    ParameterOrClose,
    CommaOrClose,
    Parameter,
}

/// Scans `function name(a, b)` into a single token.
///
/// The keyword has already been consumed; `keyword` is its span. The resulting
/// token spans the whole header and carries a `name` attribute followed by one
/// `parameter` attribute per declared parameter.
fn scan_function_header(lexer: &mut Lexer<'_, RawToken>, keyword: Span) -> Result<Token> {
    let mut attributes = Vec::new();

    let (raw, span, slice) = next_in_header(lexer)?;
    if raw != RawToken::Word {
        return Err(Error::lexical(format!("expected a function name after `function`, found `{slice}`"),
                                  span));
    }
    attributes.push(Attribute { key: AttributeKey::Name,
                                value: slice.to_string(),
                                span });

    let (raw, span, slice) = next_in_header(lexer)?;
    if raw != RawToken::LParen {
        return Err(Error::lexical(format!("expected `(` after the function name, found `{slice}`"),
                                  span));
    }

    let mut state = HeaderState::ParameterOrClose;
    let close = loop {
        let (raw, span, slice) = next_in_header(lexer)?;
        match (raw, state) {
            (RawToken::RParen, HeaderState::ParameterOrClose | HeaderState::CommaOrClose) => {
                break span;
            },
            (RawToken::Word, HeaderState::ParameterOrClose | HeaderState::Parameter) => {
                attributes.push(Attribute { key: AttributeKey::Parameter,
                                            value: slice.to_string(),
                                            span });
                state = HeaderState::CommaOrClose;
            },
            (RawToken::Comma, HeaderState::CommaOrClose) => state = HeaderState::Parameter,
            (_, HeaderState::CommaOrClose) => {
                return Err(Error::lexical(format!("expected `,` or `)` in parameter list, found `{slice}`"),
                                          span));
            },
            _ => {
                return Err(Error::lexical(format!("expected a parameter name, found `{slice}`"),
                                          span));
            },
        }
    };

    let span = keyword.to(close);
    let text = lexer.source().get(span.start..span.end).unwrap_or_default();
    Ok(Token { kind: TokenKind::FunctionDeclaration,
               text: text.to_string(),
               span,
               attributes })
}

/// Pulls the next raw lexeme of a function header, skipping line breaks.
fn next_in_header<'s>(lexer: &mut Lexer<'s, RawToken>) -> Result<(RawToken, Span, &'s str)> {
    loop {
        let Some(raw) = lexer.next() else {
            let end = lexer.source().len();
            return Err(Error::lexical("unterminated function declaration", Span::point(end)));
        };
        let span = Span::from(lexer.span());
        let slice = lexer.slice();
        match raw {
            Ok(RawToken::NewLine) => {},
            Ok(RawToken::WordIntoNumber) => return Err(digits_in_identifier(slice, span)),
            Ok(raw) => return Ok((raw, span, slice)),
            Err(()) => return Err(unrecognised(slice, span)),
        }
    }
}
