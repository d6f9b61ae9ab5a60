use logos::Logos;

/// Spec-level tokens and their attributes.
///
/// A [`token::Token`] is what the AST builder consumes. It carries its kind,
/// its text, its span and, for function-declaration headers, attributes naming
/// the function and each parameter.
pub mod token;
/// The scanner.
///
/// Drives the raw lexer over a character source and assembles the final token
/// sequence: function headers are folded into a single token, numeric literals
/// glued to letters and unknown characters are reported as lexical errors.
pub mod scanner;

/// Represents a raw lexeme recognised in the source text.
///
/// Raw lexemes are matched with maximal munch, so a keyword only matches as a
/// whole word: `return` is [`RawToken::Return`] while `returned` is a
/// [`RawToken::Word`]. The scanner turns these into [`token::Token`]s.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    /// `return`
    #[token("return")]
    Return,
    /// `var`
    #[token("var")]
    Var,
    /// `function`
    #[token("function")]
    Function,
    /// `true` or `false`.
    #[token("true")]
    #[token("false")]
    Bool,
    /// A double-quoted string literal, taken verbatim.
    #[regex(r#""[^"]*""#)]
    DoubleQuoted,
    /// A single-quoted string literal, taken verbatim.
    #[regex(r"'[^']*'")]
    SingleQuoted,
    /// Numeric literal tokens, such as `42` or `3.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// A numeric literal running straight into a letter, such as `4x`.
    #[regex(r"[0-9]+(\.[0-9]+)?[a-zA-Z_]")]
    NumberIntoWord,
    /// A word running into digits, such as `a2`.
    #[regex(r"[a-zA-Z_]+[0-9][a-zA-Z0-9_]*")]
    WordIntoNumber,
    /// A run of ASCII letters and underscores.
    #[regex(r"[a-zA-Z_]+")]
    Word,
    /// `\n`
    #[token("\n")]
    NewLine,
    /// `=`
    #[token("=")]
    Equals,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `+`, `-`, `*` or `/`.
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    Operator,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}
