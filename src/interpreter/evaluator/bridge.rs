use std::io::{self, Write};

use crate::interpreter::value::Value;

/// Names of the native functions predefined in the root scope.
pub const NATIVE_FUNCTIONS: &[&str] = &["print"];

/// Performs the side effects of native functions.
///
/// The evaluator calls the bridge synchronously whenever a native function
/// value is called; the bridge owns all real output.
pub trait Bridge {
    /// Carries out `print` with the evaluated arguments.
    fn print(&mut self, values: &[Value<'_>]);
}

/// Renders `print` arguments as one line: values separated by a space.
///
/// # Example
/// ```
/// use sprig::interpreter::{evaluator::bridge::render_line, value::Value};
///
/// let line = render_line(&[Value::from("sum:"), Value::from(13.0)]);
/// assert_eq!(line, "sum: 13");
/// ```
#[must_use]
pub fn render_line(values: &[Value<'_>]) -> String {
    values.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

/// Prints to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleBridge;

impl Bridge for ConsoleBridge {
    fn print(&mut self, values: &[Value<'_>]) {
        let line = render_line(values);
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{line}") {
            tracing::warn!("failed to print: {e}");
        }
    }
}

/// An owned snapshot of a printed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Printed {
    Number(f64),
    String(String),
    Boolean(bool),
    /// A function value, by name.
    Function(String),
    /// A native function value, by name.
    NativeFunction(String),
    Unknown,
}

impl From<&Value<'_>> for Printed {
    fn from(value: &Value<'_>) -> Self {
        match value {
            Value::Number(n) => Self::Number(*n),
            Value::String(s) => Self::String(s.clone()),
            Value::Boolean(b) => Self::Boolean(*b),
            Value::Function(function) => Self::Function(function.name().to_string()),
            Value::NativeFunction(name) => Self::NativeFunction(name.clone()),
            Value::Unknown => Self::Unknown,
        }
    }
}

/// Records every `print` call instead of performing it.
#[derive(Debug, Default, Clone)]
pub struct RecordingBridge {
    calls: Vec<Vec<Printed>>,
    lines: Vec<String>,
}

impl RecordingBridge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The arguments of every `print` call, in call order.
    #[must_use]
    pub fn calls(&self) -> &[Vec<Printed>] {
        &self.calls
    }

    /// Rendered lines, one per `print` call.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All rendered lines, each followed by a newline.
    #[must_use]
    pub fn output(&self) -> String {
        self.lines.iter().map(|l| format!("{l}\n")).collect()
    }
}

impl Bridge for RecordingBridge {
    fn print(&mut self, values: &[Value<'_>]) {
        self.calls.push(values.iter().map(Printed::from).collect());
        self.lines.push(render_line(values));
    }
}
