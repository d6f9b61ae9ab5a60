use std::fmt;

use crate::util::span::Span;

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `return`
    Return,
    /// `var`
    VariableDeclaration,
    /// A whole `function name(params)` header.
    FunctionDeclaration,
    /// A quoted string; the token text is the content between the quotes.
    String,
    /// A numeric literal.
    Number,
    /// `true` or `false`.
    Boolean,
    /// An explicit line break.
    NewLine,
    /// `=`
    Assign,
    /// `{`
    OpenBlock,
    /// `}`
    CloseBlock,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// One of `+ - * /`.
    Operator,
    /// Any other word: a name to be resolved at run time.
    Identifier,
}

impl TokenKind {
    /// Tokens that let a finished expression continue as the left operand of
    /// a larger one.
    #[must_use]
    pub const fn is_continuation(self) -> bool {
        matches!(self, Self::Assign | Self::Operator | Self::OpenParen | Self::Dot)
    }

    /// Tokens that separate statements.
    #[must_use]
    pub const fn is_separator(self) -> bool {
        matches!(self, Self::NewLine | Self::Semicolon)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Return => "`return`",
            Self::VariableDeclaration => "`var`",
            Self::FunctionDeclaration => "function declaration",
            Self::String => "string literal",
            Self::Number => "number literal",
            Self::Boolean => "boolean literal",
            Self::NewLine => "newline",
            Self::Assign => "`=`",
            Self::OpenBlock => "`{`",
            Self::CloseBlock => "`}`",
            Self::OpenParen => "`(`",
            Self::CloseParen => "`)`",
            Self::Semicolon => "`;`",
            Self::Comma => "`,`",
            Self::Dot => "`.`",
            Self::Operator => "operator",
            Self::Identifier => "identifier",
        };
        f.write_str(name)
    }
}

/// Names of the attributes a token can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// The declared name of a function.
    Name,
    /// One declared parameter of a function.
    Parameter,
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Parameter => write!(f, "parameter"),
        }
    }
}

/// Sub-lexical detail attached to a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key:   AttributeKey,
    pub value: String,
    pub span:  Span,
}

/// A scanned token.
///
/// Tokens are immutable once produced and owned by the token sequence the
/// scanner returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind:       TokenKind,
    /// The token's text. For strings this excludes the quotes.
    pub text:       String,
    pub span:       Span,
    pub attributes: Vec<Attribute>,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self { kind,
               text: text.into(),
               span,
               attributes: Vec::new() }
    }

    /// The first attribute stored under `key`.
    #[must_use]
    pub fn attribute(&self, key: AttributeKey) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.key == key)
    }

    /// Every attribute stored under `key`, in source order.
    pub fn attributes(&self, key: AttributeKey) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().filter(move |a| a.key == key)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @{}", self.kind, self.text, self.span)?;
        for attribute in &self.attributes {
            write!(f, " {}={:?}@{}", attribute.key, attribute.value, attribute.span)?;
        }
        Ok(())
    }
}
