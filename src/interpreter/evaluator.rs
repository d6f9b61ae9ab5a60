/// Core evaluation logic.
///
/// Contains the [`core::Evaluator`], the per-kind dispatch over the syntax
/// tree and the handling of declarations, assignments and blocks.
pub mod core;

/// Scopes ("heaps").
///
/// Name-to-value maps with a lookup-only link to the enclosing scope, shared
/// between call frames and the closures that capture them.
pub mod heap;

/// Binary operator evaluation.
///
/// Arithmetic on numbers and text concatenation for everything else that has
/// a textual form.
pub mod binary;

/// Function evaluation.
///
/// Creating function values, calling them with a fresh scope parented to
/// their closure, and dispatching native functions to the bridge.
pub mod function;

/// The bridge to native side effects.
///
/// Native functions such as `print` are carried out by a [`bridge::Bridge`]
/// supplied by the host.
pub mod bridge;

pub use self::{
    bridge::{Bridge, ConsoleBridge, Printed, RecordingBridge},
    core::{EvalResult, Evaluator},
    heap::{HeapError, Scope},
};
