use crate::{
    ast::{Node, NodeKind},
    error::{Error, ResultExt},
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator, MAX_CALL_DEPTH, heap_error},
            heap::Scope,
        },
        value::{FunctionValue, Value},
    },
};

impl Evaluator<'_> {
    /// Evaluates a function literal.
    ///
    /// Declares the function's name in the current scope and stores a function
    /// value whose closure is that same scope. Yields the function value, so a
    /// function literal can also be returned or passed along.
    pub(super) fn eval_function<'a>(&mut self,
                                    node: &'a Node,
                                    scope: &Scope<'a>)
                                    -> EvalResult<Option<Value<'a>>> {
        let NodeKind::Function { name, .. } = &node.kind else {
            return Err(Error::runtime("expected a function", node.span));
        };

        let function = Value::Function(FunctionValue { node,
                                                       closure: scope.clone() });
        tracing::trace!(%name, "define function");
        scope.declare(name, Value::Unknown)
             .and_then(|()| scope.assign(name, function.clone()))
             .map_err(|e| heap_error(e, node.span))?;
        Ok(Some(function))
    }

    /// Evaluates a call expression.
    ///
    /// The callee and every argument are evaluated first, independently of how
    /// many parameters the callee declares. Native functions are handed to the
    /// bridge and yield nothing. User functions run in a new scope whose parent
    /// is the function's closure, so names resolve lexically.
    ///
    /// # Errors
    /// - the callee is not a function ("no reference to a function"),
    /// - an argument yields no value,
    /// - the call nests deeper than [`MAX_CALL_DEPTH`],
    /// - anything the function body reports, wrapped with the function name.
    pub(super) fn eval_call<'a>(&mut self,
                                node: &'a Node,
                                callee: &'a Node,
                                arguments: &'a [Node],
                                scope: &Scope<'a>)
                                -> EvalResult<Option<Value<'a>>> {
        let target = self.eval(callee, scope)?;

        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.eval_value(argument, scope)?);
        }

        match target {
            Some(Value::NativeFunction(name)) => {
                self.call_native(&name, &values, node)?;
                Ok(None)
            },
            Some(Value::Function(function)) => self.call_function(&function, values, node),
            Some(other) => Err(Error::runtime(format!("no reference to a function: callee is a {}",
                                                      other.type_name()),
                                              callee.span)),
            None => Err(Error::runtime("no reference to a function: callee yields no value",
                                       callee.span)),
        }
    }

    fn call_native(&mut self, name: &str, values: &[Value<'_>], node: &Node) -> EvalResult<()> {
        tracing::debug!(function = name, arguments = values.len(), "native call");
        match name {
            "print" => {
                self.bridge.print(values);
                Ok(())
            },
            _ => Err(Error::runtime(format!("unknown native function `{name}`"), node.span)),
        }
    }

    /// Runs a user function with already evaluated arguments.
    ///
    /// Each declared parameter is declared in the new scope and bound to the
    /// argument at the same position. Parameters without an argument stay
    /// `Unknown`; surplus arguments are dropped.
    fn call_function<'a>(&mut self,
                         function: &FunctionValue<'a>,
                         values: Vec<Value<'a>>,
                         node: &'a Node)
                         -> EvalResult<Option<Value<'a>>> {
        let definition: &'a Node = function.node;
        let NodeKind::Function { name, parameters, body } = &definition.kind else {
            return Err(Error::runtime("function value without a function node", node.span));
        };

        if self.depth >= MAX_CALL_DEPTH {
            return Err(Error::runtime(format!("maximum call depth of {MAX_CALL_DEPTH} exceeded"),
                                      node.span));
        }

        tracing::debug!(function = %name,
                        parameters = parameters.len(),
                        arguments = values.len(),
                        "call");

        let frame = Scope::child_of(&function.closure);
        let mut values = values.into_iter();
        for parameter in parameters {
            frame.declare(&parameter.name, Value::Unknown)
                 .map_err(|e| heap_error(e, parameter.span))
                 .with_context(|| format!("in call to `{name}`"))?;
            if let Some(value) = values.next() {
                frame.assign(&parameter.name, value)
                     .map_err(|e| heap_error(e, parameter.span))?;
            }
        }

        self.depth += 1;
        let result = self.eval(body, &frame);
        self.depth -= 1;

        result.with_context(|| format!("in call to `{name}`"))
    }
}
