/// Numeric text helpers.
///
/// Converts between source-level numeric text and the `f64` values the
/// interpreter computes with. Every number in the language is a double, so the
/// helpers here are the single place that decides how a number looks when it is
/// printed or concatenated with a string.
pub mod num;
/// Source spans.
///
/// Half-open byte ranges into the program text, shared by tokens, AST nodes
/// and errors.
pub mod span;
/// Stack growth for deep recursion.
pub mod stack;
