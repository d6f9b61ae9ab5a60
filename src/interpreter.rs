/// The evaluator module executes the syntax tree.
///
/// The evaluator walks the tree produced by the parser, maintaining a chain
/// of scopes, producing values and handing native calls to the bridge.
///
/// # Responsibilities
/// - Evaluates every node kind, including calls with lexical closures.
/// - Manages declarations and assignments through the scope chain.
/// - Reports runtime errors such as undeclared names or calls of non-functions.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (scanner) reads the raw source text and produces the token
/// sequence: keywords, literals, identifiers, symbols and whole function
/// headers. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and span.
/// - Resolves keyword/identifier ambiguity by maximal munch.
/// - Reports lexical errors for illegal characters and malformed literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Parsing is organised as a set of node processors, one per token kind,
/// selected by a dispatcher. A processor may receive the node built just
/// before it as its left operand, which is how operators, calls and property
/// reads attach to what precedes them.
///
/// # Responsibilities
/// - Converts tokens into the node tree rooted at a `Root` node.
/// - Validates grammar, reporting syntax errors with their source span.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: numbers, strings, booleans, functions, native
///   functions and the unassigned sentinel.
/// - Provides the textual forms used by `print` and concatenation.
pub mod value;
