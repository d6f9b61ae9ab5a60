use std::fmt;

use crate::{
    ast::{Node, NodeKind},
    interpreter::evaluator::heap::Scope,
    util::num::format_number,
};

/// Represents a runtime value in the interpreter.
///
/// The lifetime `'a` is the lifetime of the syntax tree: function values
/// point at the `Function` node they were created from.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// A double precision number. There is no integer type.
    Number(f64),
    /// A string.
    String(String),
    /// `true` or `false`.
    Boolean(bool),
    /// A user-defined function together with its closure.
    Function(FunctionValue<'a>),
    /// A function implemented by the bridge, by name.
    NativeFunction(String),
    /// A declared name that has not been assigned yet.
    Unknown,
}

/// A function value: the defining node and the scope it closes over.
///
/// The closure is the scope that was active when the function literal was
/// evaluated, not the scope of whoever calls it. Several function values may
/// share one closure.
#[derive(Clone)]
pub struct FunctionValue<'a> {
    /// The `Function` node.
    pub node:    &'a Node,
    /// The defining scope.
    pub closure: Scope<'a>,
}

impl FunctionValue<'_> {
    /// The declared name of the function.
    #[must_use]
    pub fn name(&self) -> &str {
        match &self.node.kind {
            NodeKind::Function { name, .. } => name,
            _ => "<anonymous>",
        }
    }
}

impl fmt::Debug for FunctionValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
         .field("name", &self.name())
         .field("span", &self.node.span)
         .finish_non_exhaustive()
    }
}

impl PartialEq for FunctionValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.node, other.node) && self.closure.ptr_eq(&other.closure)
    }
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value<'_> {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value<'_> {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl Value<'_> {
    /// The name of the value's type, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Function(_) => "function",
            Self::NativeFunction(_) => "native function",
            Self::Unknown => "unknown",
        }
    }

    /// Casts the value to text for string concatenation.
    ///
    /// Only numbers, strings and booleans have a textual form; every other
    /// value yields `None`.
    ///
    /// # Example
    /// ```
    /// use sprig::interpreter::value::Value;
    ///
    /// assert_eq!(Value::from(5.0).to_text().as_deref(), Some("5"));
    /// assert_eq!(Value::from(true).to_text().as_deref(), Some("true"));
    /// assert_eq!(Value::Unknown.to_text(), None);
    /// ```
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Number(n) => Some(format_number(*n)),
            Self::String(s) => Some(s.clone()),
            Self::Boolean(b) => Some(b.to_string()),
            Self::Function(_) | Self::NativeFunction(_) | Self::Unknown => None,
        }
    }
}

/// Renders the value the way `print` shows it.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Function(function) => write!(f, "<function {}>", function.name()),
            Self::NativeFunction(name) => write!(f, "<native {name}>"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
