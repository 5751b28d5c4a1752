//! Callback handle passed from the parent component to its child
//!
//! The parent defines a closure over its own state and hands the child a
//! `Callback` handle. The child can invoke the closure but has no access
//! to the captured environment, so state stays under the parent's control.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Argument a caller may supply when invoking a callback
///
/// The child picks the value at call time; it is scoped to a single
/// invocation and never stored.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// A textual value - the kind the greet callback expects
    Text(String),
    /// A numeric value - rejected by the greet callback's guard
    Number(f64),
}

impl ArgValue {
    pub fn text(value: impl Into<String>) -> Self {
        ArgValue::Text(value.into())
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Text(s) => write!(f, "{}", s),
            ArgValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Clonable handle to a parent-owned closure
///
/// Cloning the handle shares the underlying closure and its captured
/// state; it never copies the behavior. Handle identity (`same_as`) is
/// what lets a receiver skip re-composition when the callback it was
/// given has not actually changed.
pub struct Callback {
    inner: Rc<RefCell<dyn FnMut(Option<ArgValue>)>>,
}

impl Callback {
    /// Wrap a closure in a shareable handle
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(Option<ArgValue>) + 'static,
    {
        Self {
            inner: Rc::new(RefCell::new(f)),
        }
    }

    /// Invoke the closure with an optional argument
    ///
    /// Synchronous; any side effect lands in the closure's captured state
    /// before this returns.
    pub fn call(&self, arg: Option<ArgValue>) {
        (&mut *self.inner.borrow_mut())(arg);
    }

    /// Whether two handles share the same underlying closure
    pub fn same_as(&self, other: &Callback) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Clone for Callback {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}
