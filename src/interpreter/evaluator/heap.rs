use std::{
    cell::RefCell,
    collections::HashMap,
    rc::{Rc, Weak},
};

use crate::{
    ast::Node,
    interpreter::value::{FunctionValue, Value},
};

/// Failures of scope operations.
///
/// These carry no source location; the evaluator attaches the span of the
/// node that triggered them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeapError {
    /// The name is already declared in this exact scope.
    #[error("variable already declared: `{0}`")]
    AlreadyDeclared(String),
    /// The name is not declared anywhere in the scope chain.
    #[error("variable not declared: `{0}`")]
    NotDeclared(String),
    /// An enclosing scope in the chain no longer exists.
    #[error("missing closure reference while resolving `{0}`")]
    MissingClosure(String),
}

/// What a scope stores under a name.
enum Slot<'a> {
    Value(Value<'a>),
    /// A function closing over the scope that holds it. Only the node is kept;
    /// the closure is the holding scope itself and is restored on lookup.
    Local(&'a Node),
}

/// The slots of one scope and the link to its parent.
#[derive(Default)]
pub struct Heap<'a> {
    slots:  HashMap<String, Slot<'a>>,
    parent: Option<Weak<RefCell<Heap<'a>>>>,
}

/// A shared handle to a [`Heap`].
///
/// A scope is owned by every call frame and every function value holding it.
/// The link to the parent is weak: a scope never keeps its parent alive, it
/// only looks names up through it. A function stored in the scope it closes
/// over does not own that scope either, so a frame that defines functions is
/// released once no frame and no outside function value refers to it.
#[derive(Clone, Default)]
pub struct Scope<'a>(Rc<RefCell<Heap<'a>>>);

impl<'a> Scope<'a> {
    /// Creates a scope without a parent.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates an empty scope whose lookups continue in `parent`.
    #[must_use]
    pub fn child_of(parent: &Self) -> Self {
        Self(Rc::new(RefCell::new(Heap { slots:  HashMap::new(),
                                         parent: Some(Rc::downgrade(&parent.0)), })))
    }

    /// Whether both handles refer to the same scope.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Declares `name` in this scope with an initial value.
    ///
    /// # Errors
    /// [`HeapError::AlreadyDeclared`] if this scope (not a parent) already has
    /// the name.
    ///
    /// # Example
    /// ```
    /// use sprig::interpreter::{
    ///     evaluator::heap::{HeapError, Scope},
    ///     value::Value,
    /// };
    ///
    /// let scope = Scope::root();
    /// scope.declare("a", Value::Unknown).unwrap();
    ///
    /// assert_eq!(scope.declare("a", Value::Unknown),
    ///            Err(HeapError::AlreadyDeclared("a".into())));
    /// ```
    pub fn declare(&self, name: &str, value: Value<'a>) -> Result<(), HeapError> {
        let mut heap = self.0.borrow_mut();
        if heap.slots.contains_key(name) {
            return Err(HeapError::AlreadyDeclared(name.to_string()));
        }
        let slot = self.slot_for(value);
        heap.slots.insert(name.to_string(), slot);
        Ok(())
    }

    /// Stores `value` in the nearest scope of the chain that declares `name`.
    ///
    /// # Errors
    /// [`HeapError::NotDeclared`] if no scope in the chain declares the name,
    /// [`HeapError::MissingClosure`] if the chain is broken.
    pub fn assign(&self, name: &str, value: Value<'a>) -> Result<(), HeapError> {
        let owner = self.resolve(name)?;
        let slot = owner.slot_for(value);
        owner.0.borrow_mut().slots.insert(name.to_string(), slot);
        Ok(())
    }

    /// Looks `name` up in this scope, then through the parent chain.
    ///
    /// # Errors
    /// See [`Scope::assign`].
    ///
    /// # Example
    /// ```
    /// use sprig::interpreter::{evaluator::heap::Scope, value::Value};
    ///
    /// let outer = Scope::root();
    /// outer.declare("first", Value::from(4.0)).unwrap();
    ///
    /// let inner = Scope::child_of(&outer);
    /// assert_eq!(inner.lookup("first"), Ok(Value::from(4.0)));
    /// assert!(inner.lookup("second").is_err());
    /// ```
    pub fn lookup(&self, name: &str) -> Result<Value<'a>, HeapError> {
        let owner = self.resolve(name)?;
        let heap = owner.0.borrow();
        match heap.slots.get(name) {
            Some(Slot::Value(value)) => Ok(value.clone()),
            Some(Slot::Local(node)) => {
                Ok(Value::Function(FunctionValue { node:    *node,
                                                   closure: owner.clone(), }))
            },
            None => Err(HeapError::NotDeclared(name.to_string())),
        }
    }

    /// Drops the ownership edge of a function closing over this very scope.
    fn slot_for(&self, value: Value<'a>) -> Slot<'a> {
        match value {
            Value::Function(function) if function.closure.ptr_eq(self) => Slot::Local(function.node),
            value => Slot::Value(value),
        }
    }

    /// Finds the scope in the chain that declares `name`.
    fn resolve(&self, name: &str) -> Result<Self, HeapError> {
        let mut current = self.clone();
        loop {
            let parent = {
                let heap = current.0.borrow();
                if heap.slots.contains_key(name) {
                    break;
                }
                heap.parent.clone()
            };
            let Some(parent) = parent else {
                return Err(HeapError::NotDeclared(name.to_string()));
            };
            let parent = parent.upgrade()
                               .ok_or_else(|| HeapError::MissingClosure(name.to_string()))?;
            current = Self(parent);
        }
        Ok(current)
    }
}
