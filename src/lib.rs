//! # sprig
//!
//! sprig is a small scripting language with first-class functions and lexical
//! closures. Source text is scanned into tokens, assembled into a syntax tree
//! by a set of grammar processors, and executed by a tree-walking evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{Error, ResultExt, diagnostic::render},
    interpreter::{
        evaluator::{Bridge, Evaluator},
        lexer::{scanner::scan_str, token::Token},
        parser::build,
    },
    io::OutputSink,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` type and its `NodeKind` variants, which
/// represent the syntactic structure of a program as a tree. The tree is built
/// by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one node kind per language construct and the shape it allows.
/// - Attaches source spans to nodes for error reporting.
/// - Renders trees for the `--ast` debug dump.
pub mod ast;
/// Provides the error type for scanning, parsing and evaluation.
///
/// Every failure is an `Error` with a kind, a message, the span of the
/// innermost failure and an optional cause. Layers add context as errors
/// propagate; diagnostics render the chain against the source.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the scanner, the AST builder, the evaluator and
/// the runtime values.
pub mod interpreter;
/// Collaborators at the edges of the pipeline.
///
/// Character sources that feed the scanner and text sinks that receive
/// debug dumps and diagnostics.
pub mod io;
/// General utilities: spans, number formatting and stack growth.
pub mod util;

/// Switches for the optional debug output of [`interpret`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Dump the token sequence before building the tree.
    pub dump_tokens: bool,
    /// Dump the syntax tree before executing it.
    pub dump_ast:    bool,
}

/// Scans, builds and executes `source`, returning the structured error on
/// failure.
///
/// Native calls are carried out by `bridge`.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error, wrapped with the stage
/// it occurred in.
///
/// # Examples
/// ```
/// use sprig::{execute, interpreter::evaluator::RecordingBridge};
///
/// let mut bridge = RecordingBridge::new();
/// execute("var a = 5; print(a);", &mut bridge).unwrap();
/// assert_eq!(bridge.lines(), ["5"]);
///
/// // `b` is never declared.
/// assert!(execute("b = 1", &mut bridge).is_err());
/// ```
pub fn execute(source: &str, bridge: &mut dyn Bridge) -> Result<(), Error> {
    run(source, &Options::default(), None, bridge)
}

/// Scans, builds and executes `source`, presenting any failure as a
/// diagnostic on `sink`.
///
/// Token and tree dumps requested in `options` are written to `sink` before
/// execution. Returns whether the program ran to completion.
///
/// # Examples
/// ```
/// use sprig::{Options, interpret, interpreter::evaluator::RecordingBridge, io::BufferSink};
///
/// let mut sink = BufferSink::new();
/// let mut bridge = RecordingBridge::new();
///
/// let ok = interpret("print(missing)", &Options::default(), &mut sink, &mut bridge);
///
/// assert!(!ok);
/// assert_eq!(sink.segments()[1].text, "missing");
/// assert!(sink.error_text().contains("variable not declared: `missing`"));
/// ```
pub fn interpret(source: &str,
                 options: &Options,
                 sink: &mut dyn OutputSink,
                 bridge: &mut dyn Bridge)
                 -> bool {
    match run(source, options, Some(&mut *sink), bridge) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(kind = %e.kind, span = %e.span, "run failed");
            render(source, &e, sink);
            false
        },
    }
}

fn run(source: &str,
       options: &Options,
       mut sink: Option<&mut dyn OutputSink>,
       bridge: &mut dyn Bridge)
       -> Result<(), Error> {
    let tokens = scan_str(source).context("while scanning the source")?;
    if options.dump_tokens
       && let Some(sink) = sink.as_deref_mut()
    {
        dump_tokens(&tokens, sink);
    }

    let root = build(&tokens).context("while building the syntax tree")?;
    if options.dump_ast
       && let Some(sink) = sink.as_deref_mut()
    {
        sink.write("AST\n");
        sink.write(&root.dump());
    }

    Evaluator::new(bridge).run(&root).context("while executing the program")
}

fn dump_tokens(tokens: &[Token], sink: &mut dyn OutputSink) {
    sink.write("TOKENS\n");
    for token in tokens {
        sink.write(&format!("{token}\n"));
    }
}
