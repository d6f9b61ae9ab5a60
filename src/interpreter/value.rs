/// Runtime values.
///
/// Defines the `Value` enum produced by evaluation, the function values that
/// capture their defining scope, and the conversions used by `print` and by
/// string concatenation.
pub mod core;

pub use self::core::{FunctionValue, Value};
