use std::fmt::{self, Write};

use crate::util::{span::Span, stack::ensure_sufficient_stack};

/// A node of the abstract syntax tree.
///
/// Every node exclusively owns its children; the tree has no back references
/// and no sharing. It is built once by the AST builder and only read by the
/// evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// What the node is, together with its attributes and children.
    pub kind: NodeKind,
    /// Source text the node was built from.
    pub span: Span,
}

/// The kind of a node and the shape that kind allows.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// The whole program.
    Root {
        /// Top-level statements, in order.
        body: Vec<Node>,
    },
    /// `var name`
    VariableDeclaration {
        /// The declared name.
        name: String,
    },
    /// `target = value`
    Assignment {
        /// Where the value is stored; must evaluate as a reference.
        target: Box<Node>,
        /// The assigned expression.
        value:  Box<Node>,
    },
    /// A name resolved through the scope chain.
    Reference {
        /// The referenced name.
        name: String,
    },
    /// A numeric literal.
    Number(f64),
    /// A string literal.
    String(String),
    /// `true` or `false`.
    Boolean(bool),
    /// `left op right`
    BinaryExpression {
        /// The operator.
        operator: BinaryOperator,
        /// Left operand.
        left:     Box<Node>,
        /// Right operand.
        right:    Box<Node>,
    },
    /// `( inner )`
    ParenthesizedExpression {
        /// The wrapped expression.
        inner: Box<Node>,
    },
    /// `object.property`
    ReadProperty {
        /// The expression whose property is read.
        object:   Box<Node>,
        /// The property name.
        property: String,
    },
    /// `callee(arguments...)`
    CallExpression {
        /// The expression producing the function to call.
        callee:    Box<Node>,
        /// Argument expressions, in order.
        arguments: Vec<Node>,
    },
    /// `function name(parameters) { ... }`
    Function {
        /// The declared function name.
        name:       String,
        /// Declared parameter names, in order.
        parameters: Vec<Parameter>,
        /// The function body; always a [`NodeKind::Block`].
        body:       Box<Node>,
    },
    /// `{ statements }`
    Block {
        /// Statements, in order.
        body: Vec<Node>,
    },
    /// `return value`
    Return {
        /// The returned expression, if any.
        value: Option<Box<Node>>,
    },
}

/// A declared function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// The parameter name.
    pub name: String,
    /// Where the parameter was declared.
    pub span: Span,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Maps an operator symbol to its operator.
    ///
    /// ## Example
    /// ```
    /// use sprig::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("*"), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_symbol("%"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl Node {
    #[must_use]
    pub const fn new(kind: NodeKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// A short name for the node's kind, used in messages and dumps.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::Root { .. } => "Root",
            NodeKind::VariableDeclaration { .. } => "VariableDeclaration",
            NodeKind::Assignment { .. } => "Assignment",
            NodeKind::Reference { .. } => "Reference",
            NodeKind::Number(_) => "Number",
            NodeKind::String(_) => "String",
            NodeKind::Boolean(_) => "Boolean",
            NodeKind::BinaryExpression { .. } => "BinaryExpression",
            NodeKind::ParenthesizedExpression { .. } => "ParenthesizedExpression",
            NodeKind::ReadProperty { .. } => "ReadProperty",
            NodeKind::CallExpression { .. } => "CallExpression",
            NodeKind::Function { .. } => "Function",
            NodeKind::Block { .. } => "Block",
            NodeKind::Return { .. } => "Return",
        }
    }

    /// Renders the tree below this node, one node per line, children
    /// indented by two spaces.
    ///
    /// ## Example
    /// ```
    /// use sprig::{
    ///     ast::{Node, NodeKind},
    ///     util::span::Span,
    /// };
    ///
    /// let node = Node::new(NodeKind::Reference { name: "a".into() }, Span::new(0, 1));
    /// assert_eq!(node.dump(), "Reference name=\"a\" @0..1\n");
    /// ```
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}{}", self.kind_name());
        match &self.kind {
            NodeKind::VariableDeclaration { name } | NodeKind::Reference { name } => {
                let _ = write!(out, " name={name:?}");
            },
            NodeKind::Number(value) => {
                let _ = write!(out, " value={value}");
            },
            NodeKind::String(value) => {
                let _ = write!(out, " value={value:?}");
            },
            NodeKind::Boolean(value) => {
                let _ = write!(out, " value={value}");
            },
            NodeKind::BinaryExpression { operator, .. } => {
                let _ = write!(out, " operator={operator}");
            },
            NodeKind::ReadProperty { property, .. } => {
                let _ = write!(out, " property={property:?}");
            },
            NodeKind::Function { name, parameters, .. } => {
                let _ = write!(out, " name={name:?}");
                for parameter in parameters {
                    let _ = write!(out, " parameter={:?}", parameter.name);
                }
            },
            _ => {},
        }
        let _ = writeln!(out, " @{}", self.span);

        for child in self.children() {
            ensure_sufficient_stack(|| child.dump_into(out, depth + 1));
        }
    }

    /// Body children followed by call arguments, in source order.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match &self.kind {
            NodeKind::Root { body } | NodeKind::Block { body } => body.iter().collect(),
            NodeKind::Assignment { target, value } => vec![&**target, &**value],
            NodeKind::BinaryExpression { left, right, .. } => vec![&**left, &**right],
            NodeKind::ParenthesizedExpression { inner } => vec![&**inner],
            NodeKind::ReadProperty { object, .. } => vec![&**object],
            NodeKind::CallExpression { callee, arguments } => {
                std::iter::once(callee.as_ref()).chain(arguments).collect()
            },
            NodeKind::Function { body, .. } => vec![&**body],
            NodeKind::Return { value } => value.iter().map(|v| &**v).collect(),
            NodeKind::VariableDeclaration { .. }
            | NodeKind::Reference { .. }
            | NodeKind::Number(_)
            | NodeKind::String(_)
            | NodeKind::Boolean(_) => Vec::new(),
        }
    }
}

/// Tears the tree down through a worklist. Operator chains nest one node per
/// operand, so a recursive drop of a long chain would overflow the stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.kind.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.kind.detach_children(&mut pending);
        }
    }
}

impl NodeKind {
    /// Moves every child into `out`, leaving childless placeholders behind.
    fn detach_children(&mut self, out: &mut Vec<Node>) {
        match self {
            Self::Root { body } | Self::Block { body } => out.append(body),
            Self::Assignment { target: first, value: second }
            | Self::BinaryExpression { left: first, right: second, .. } => {
                out.push(detach(first));
                out.push(detach(second));
            },
            Self::ParenthesizedExpression { inner: child }
            | Self::ReadProperty { object: child, .. }
            | Self::Function { body: child, .. } => out.push(detach(child)),
            Self::CallExpression { callee, arguments } => {
                out.push(detach(callee));
                out.append(arguments);
            },
            Self::Return { value } => {
                if let Some(value) = value.take() {
                    out.push(*value);
                }
            },
            Self::VariableDeclaration { .. }
            | Self::Reference { .. }
            | Self::Number(_)
            | Self::String(_)
            | Self::Boolean(_) => {},
        }
    }
}

fn detach(child: &mut Node) -> Node {
    std::mem::replace(child, Node::new(NodeKind::Boolean(false), Span::default()))
}
