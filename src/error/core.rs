use std::fmt;

use crate::util::span::Span;

/// Convenience alias used across the scanner, builder and evaluator.
pub type Result<T> = std::result::Result<T, Error>;

/// The stage that detected a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Illegal characters, malformed literals or function headers.
    Lexical,
    /// Token sequences no grammar rule accepts.
    Syntax,
    /// Failures while executing the tree.
    Runtime,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical => write!(f, "lexical"),
            Self::Syntax => write!(f, "syntax"),
            Self::Runtime => write!(f, "runtime"),
        }
    }
}

/// A failure anywhere in the pipeline.
///
/// Errors form a chain: each layer that propagates an error may wrap it with
/// [`Error::context`], which adds a message on top while keeping the kind and
/// the span of the innermost error. The span is what a diagnostic highlights;
/// the chain is what it prints.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    /// Stage that produced the innermost error.
    pub kind:    ErrorKind,
    /// Message added at this layer.
    pub message: String,
    /// Source span of the innermost error.
    pub span:    Span,
    /// The error this one wraps, if any.
    #[source]
    pub cause:   Option<Box<Error>>,
}

impl Error {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self { kind,
               message: message.into(),
               span,
               cause: None }
    }

    #[must_use]
    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Lexical, message, span)
    }

    #[must_use]
    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Syntax, message, span)
    }

    #[must_use]
    pub fn runtime(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Runtime, message, span)
    }

    /// Wraps this error with an outer message.
    ///
    /// The returned error keeps this error's kind and span so the diagnostic
    /// still points at the place where the failure originated.
    ///
    /// # Example
    /// ```
    /// use sprig::{error::Error, util::span::Span};
    ///
    /// let inner = Error::runtime("variable `x` is not declared", Span::new(4, 5));
    /// let outer = inner.context("in call to `f`");
    ///
    /// assert_eq!(outer.span, Span::new(4, 5));
    /// assert_eq!(outer.chain().collect::<Vec<_>>(),
    ///            vec!["in call to `f`", "variable `x` is not declared"]);
    /// ```
    #[must_use]
    pub fn context(self, message: impl Into<String>) -> Self {
        Self { kind:    self.kind,
               message: message.into(),
               span:    self.span,
               cause:   Some(Box::new(self)), }
    }

    /// Messages of the whole chain, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &str> {
        std::iter::successors(Some(self), |e| e.cause.as_deref()).map(|e| e.message.as_str())
    }

    /// The error at the bottom of the chain.
    #[must_use]
    pub fn innermost(&self) -> &Self {
        let mut current = self;
        while let Some(cause) = current.cause.as_deref() {
            current = cause;
        }
        current
    }
}

/// Unlinks the chain one layer at a time. Runaway recursion wraps an error once
/// per call frame, and a recursive drop of that chain would overflow the stack.
impl Drop for Error {
    fn drop(&mut self) {
        let mut cause = self.cause.take();
        while let Some(mut error) = cause {
            cause = error.cause.take();
        }
    }
}

/// Adds [`Error::context`] to results.
pub trait ResultExt<T> {
    /// Wraps the error, if any, with an outer message.
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Like [`ResultExt::context`], building the message only on failure.
    fn with_context<M: Into<String>>(self, message: impl FnOnce() -> M) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(message))
    }

    fn with_context<M: Into<String>>(self, message: impl FnOnce() -> M) -> Result<T> {
        self.map_err(|e| e.context(message()))
    }
}
