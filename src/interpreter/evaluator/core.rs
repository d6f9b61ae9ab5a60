use crate::{
    ast::{Node, NodeKind},
    error::{Error, Result},
    interpreter::{
        evaluator::{
            bridge::{Bridge, NATIVE_FUNCTIONS},
            heap::{HeapError, Scope},
        },
        value::Value,
    },
    util::{span::Span, stack::ensure_sufficient_stack},
};

/// Result type used by the evaluator.
///
/// Evaluating a node yields `Some(Value)` when the node produces a value and
/// `None` when it does not (declarations, blocks without `return`, native
/// calls).
pub type EvalResult<T> = Result<T>;

/// Maximum nesting of user-defined function calls.
pub const MAX_CALL_DEPTH: usize = 10_000;

/// Walks a syntax tree.
///
/// The evaluator holds the bridge that native functions are dispatched to and
/// the current call depth. Scopes are passed down explicitly: each node is
/// evaluated against the scope active at that point.
pub struct Evaluator<'b> {
    pub(super) bridge: &'b mut dyn Bridge,
    pub(super) depth:  usize,
}

impl<'b> Evaluator<'b> {
    /// Creates an evaluator dispatching native calls to `bridge`.
    pub fn new(bridge: &'b mut dyn Bridge) -> Self {
        Self { bridge, depth: 0 }
    }

    /// Creates a root scope with the native functions predefined.
    #[must_use]
    pub fn global_scope<'a>() -> Scope<'a> {
        let scope = Scope::root();
        for name in NATIVE_FUNCTIONS {
            // A fresh scope cannot already declare anything.
            let _ = scope.declare(name, Value::NativeFunction((*name).to_string()));
        }
        scope
    }

    /// Executes a program against a fresh root scope.
    ///
    /// # Errors
    /// Returns the first runtime error; execution stops there.
    ///
    /// # Example
    /// ```
    /// use sprig::interpreter::{
    ///     evaluator::{Evaluator, RecordingBridge},
    ///     lexer::scanner::scan_str,
    ///     parser::build,
    /// };
    ///
    /// let root = build(&scan_str("var a = 5; print(a)").unwrap()).unwrap();
    /// let mut bridge = RecordingBridge::new();
    ///
    /// Evaluator::new(&mut bridge).run(&root).unwrap();
    /// assert_eq!(bridge.lines(), ["5"]);
    /// ```
    pub fn run(&mut self, root: &Node) -> EvalResult<()> {
        let scope = Self::global_scope();
        self.eval(root, &scope)?;
        Ok(())
    }

    /// Evaluates a node in `scope`.
    ///
    /// Dispatches on the node kind. Every kind has a handler, so this match is
    /// the complete description of what the language executes.
    pub fn eval<'a>(&mut self, node: &'a Node, scope: &Scope<'a>) -> EvalResult<Option<Value<'a>>> {
        ensure_sufficient_stack(|| self.dispatch(node, scope))
    }

    fn dispatch<'a>(&mut self, node: &'a Node, scope: &Scope<'a>) -> EvalResult<Option<Value<'a>>> {
        match &node.kind {
            NodeKind::Root { body } => {
                for statement in body {
                    self.eval(statement, scope)?;
                }
                Ok(None)
            },
            NodeKind::Block { body } => self.eval_block(body, scope),
            NodeKind::VariableDeclaration { name } => {
                tracing::trace!(%name, "declare");
                scope.declare(name, Value::Unknown)
                     .map_err(|e| heap_error(e, node.span))?;
                Ok(None)
            },
            NodeKind::Assignment { target, value } => self.eval_assignment(target, value, scope),
            NodeKind::Reference { name } => {
                let value = scope.lookup(name).map_err(|e| heap_error(e, node.span))?;
                Ok(Some(value))
            },
            NodeKind::Number(n) => Ok(Some(Value::Number(*n))),
            NodeKind::String(s) => Ok(Some(Value::String(s.clone()))),
            NodeKind::Boolean(b) => Ok(Some(Value::Boolean(*b))),
            NodeKind::BinaryExpression { operator, left, right } => {
                let left = self.eval_value(left, scope)?;
                let right = self.eval_value(right, scope)?;
                let value = Self::eval_binary(*operator, &left, &right, node.span)?;
                Ok(Some(value))
            },
            NodeKind::ParenthesizedExpression { inner } => self.eval(inner, scope),
            NodeKind::ReadProperty { object, property } => {
                let object = self.eval_value(object, scope)?;
                Err(Error::runtime(format!("cannot read property `{property}` of a {}",
                                           object.type_name()),
                                   node.span))
            },
            NodeKind::CallExpression { callee, arguments } => {
                self.eval_call(node, callee, arguments, scope)
            },
            NodeKind::Function { .. } => self.eval_function(node, scope),
            NodeKind::Return { value } => match value {
                Some(value) => self.eval(value, scope),
                None => Ok(None),
            },
        }
    }

    /// Evaluates a node that must produce a value.
    ///
    /// # Errors
    /// Besides the node's own errors, fails if the node yields nothing.
    pub fn eval_value<'a>(&mut self, node: &'a Node, scope: &Scope<'a>) -> EvalResult<Value<'a>> {
        self.eval(node, scope)?.ok_or_else(|| {
                                  Error::runtime(format!("expression yields no value: {}",
                                                         node.kind_name()),
                                                 node.span)
                              })
    }

    /// Executes block statements in order.
    ///
    /// Executing a `Return` statement ends the block; its value becomes the
    /// block's result. A block that runs to its end yields nothing.
    fn eval_block<'a>(&mut self, body: &'a [Node], scope: &Scope<'a>) -> EvalResult<Option<Value<'a>>> {
        for statement in body {
            if matches!(statement.kind, NodeKind::Return { .. }) {
                return self.eval(statement, scope);
            }
            self.eval(statement, scope)?;
        }
        Ok(None)
    }

    /// Evaluates the value, then stores it under the target's name.
    ///
    /// The target must be a reference to a name declared somewhere in the
    /// scope chain. Yields the assigned value.
    fn eval_assignment<'a>(&mut self,
                           target: &'a Node,
                           value: &'a Node,
                           scope: &Scope<'a>)
                           -> EvalResult<Option<Value<'a>>> {
        let value = self.eval_value(value, scope)?;

        let NodeKind::Reference { name } = &target.kind else {
            return Err(Error::runtime(format!("cannot assign to a {}", target.kind_name()),
                                      target.span));
        };

        tracing::trace!(%name, value = %value, "assign");
        scope.assign(name, value.clone())
             .map_err(|e| heap_error(e, target.span))?;
        Ok(Some(value))
    }
}

/// Lifts a scope failure into a runtime error at `span`.
pub(super) fn heap_error(error: HeapError, span: Span) -> Error {
    Error::runtime(error.to_string(), span)
}
