/// The error type shared by every stage of the pipeline.
///
/// Defines [`Error`], its [`ErrorKind`] taxonomy (lexical, syntax, runtime),
/// and the context-wrapping helpers that build a message chain while keeping
/// the innermost source span.
pub mod core;
/// Diagnostic rendering.
///
/// Presents an [`Error`] against the original source text: the failing span is
/// highlighted, the message chain follows it, and the rest of the source is
/// reproduced after that.
pub mod diagnostic;

pub use self::core::{Error, ErrorKind, Result, ResultExt};
