/// The cursor, the dispatcher and the root builder.
///
/// The dispatcher reads the current token, selects the processor registered
/// for its kind and hands it the optional left node. Processors call back into
/// the dispatcher for nested expressions.
pub mod core;

/// Literal and reference processors.
///
/// Builds `Reference`, `Number`, `String` and `Boolean` nodes and lets the
/// chain-eligible ones continue into a larger expression.
pub mod literal;

/// Binary operator and assignment processors.
///
/// Both require a left operand and parse their right operand with a fresh
/// dispatch, which makes sequential operators group to the right.
pub mod binary;

/// Call, parenthesis and property-read processors.
pub mod postfix;

/// Block processor.
///
/// Parses statements until the matching `}`.
pub mod block;

/// Declaration and `return` processors.
///
/// Handles `var`, `function` headers and `return`.
pub mod statement;

/// Helpers shared by the processors.
///
/// Operand checks, single-node reductions and the call argument list.
pub mod utils;

pub use self::core::{Cursor, ParseResult, build, process};
