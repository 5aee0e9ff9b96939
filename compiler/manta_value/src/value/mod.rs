//! Runtime values for the Manta evaluator.
//!
//! # Construction
//!
//! Heap-backed variants hold a [`Heap`] whose constructor is private, so
//! they can only be built through the factory methods:
//!
//! ```text
//! let s = Value::string("hello");
//! let f = Value::callable(NativeFn::new("id", |args| Ok(args.to_vec())));
//! let ns = Value::container(Namespace::new("env").with("x", Value::int(1)));
//! ```
//!
//! # Capability checks
//!
//! [`Value::as_callable`] and [`Value::as_container`] are the only casts.
//! Both match every variant explicitly; a value without the capability
//! yields a `MissingCapability` error.
//!
//! # Thread Safety
//!
//! Heap values are `Arc`-backed and both capability traits require
//! `Send + Sync`, so values can be handed to other threads. A single
//! evaluation still runs on one thread.

mod capability;
mod heap;
mod host;

use std::fmt;
use std::sync::Arc;

pub use capability::{Callable, Container};
pub use heap::Heap;
pub use host::{Namespace, NativeFn};

use crate::{missing_capability, undefined_name, Capability, EvalResult};

/// Runtime value in the Manta evaluator.
#[derive(Clone)]
pub enum Value {
    /// Explicit absence: what an empty slot or an empty group produces.
    Nothing,
    /// 64-bit signed integer literal.
    Int(i64),
    /// 64-bit floating-point literal.
    Float(f64),
    /// Immutable string literal.
    Str(Heap<str>),
    /// Value exposing only [`Callable`] (native function or closure).
    Callable(Heap<dyn Callable>),
    /// Value exposing only [`Container`].
    Container(Heap<dyn Container>),
    /// Host value exposing both capabilities, backed by one allocation.
    Object {
        callable: Heap<dyn Callable>,
        container: Heap<dyn Container>,
    },
}

// Factory Methods

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a float value.
    #[inline]
    pub fn float(n: f64) -> Self {
        Value::Float(n)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Str(Heap::from_arc(Arc::from(s.as_ref())))
    }

    /// Wrap a callable.
    pub fn callable(callable: impl Callable + 'static) -> Self {
        Value::Callable(Heap::from_arc(Arc::new(callable)))
    }

    /// Wrap a container.
    pub fn container(container: impl Container + 'static) -> Self {
        Value::Container(Heap::from_arc(Arc::new(container)))
    }

    /// Wrap a host value exposing both capabilities.
    pub fn object<T: Callable + Container + 'static>(object: T) -> Self {
        let shared = Arc::new(object);
        let callable: Arc<dyn Callable> = shared.clone();
        let container: Arc<dyn Container> = shared;
        Value::Object {
            callable: Heap::from_arc(callable),
            container: Heap::from_arc(container),
        }
    }
}

// Capability casts

impl Value {
    /// Cast to [`Callable`] at the point of use.
    pub fn as_callable(&self) -> EvalResult<&dyn Callable> {
        match self {
            Value::Callable(callable) | Value::Object { callable, .. } => Ok(&**callable),
            Value::Nothing
            | Value::Int(_)
            | Value::Float(_)
            | Value::Str(_)
            | Value::Container(_) => Err(missing_capability(Capability::Callable, self.type_name())),
        }
    }

    /// Cast to [`Container`] at the point of use.
    pub fn as_container(&self) -> EvalResult<&dyn Container> {
        match self {
            Value::Container(container) | Value::Object { container, .. } => Ok(&**container),
            Value::Nothing
            | Value::Int(_)
            | Value::Float(_)
            | Value::Str(_)
            | Value::Callable(_) => Err(missing_capability(Capability::Container, self.type_name())),
        }
    }

    /// `true` when the value exposes `capability`.
    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Callable => self.as_callable().is_ok(),
            Capability::Container => self.as_container().is_ok(),
        }
    }

    /// Container lookup: `MissingCapability` if the value is not a
    /// container, `UndefinedName` if `name` is absent.
    pub fn lookup(&self, name: &str) -> EvalResult {
        self.as_container()?
            .get(name)
            .ok_or_else(|| undefined_name(name))
    }

    /// Invoke with `args`.
    pub fn call(&self, args: &[Value]) -> EvalResult<Vec<Value>> {
        self.as_callable()?.invoke(args)
    }

    /// Invoke with no arguments.
    pub fn call0(&self) -> EvalResult<Vec<Value>> {
        self.call(&[])
    }

    /// Invoke with a single argument.
    pub fn call1(&self, arg: Value) -> EvalResult<Vec<Value>> {
        self.call(std::slice::from_ref(&arg))
    }
}

// Accessors

impl Value {
    /// Short kind name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nothing => "nothing",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Callable(_) => "callable",
            Value::Container(_) => "container",
            Value::Object { .. } => "object",
        }
    }

    /// `true` for [`Value::Nothing`].
    #[inline]
    pub fn is_nothing(&self) -> bool {
        matches!(self, Value::Nothing)
    }

    /// Borrow the string payload.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(&**s),
            _ => None,
        }
    }

    /// The integer payload.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The float payload.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nothing => write!(f, "Nothing"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n:?})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Callable(c) => write!(f, "Callable({})", c.name()),
            Value::Container(c) => write!(f, "Container({})", c.name()),
            Value::Object { container, .. } => write!(f, "Object({})", container.name()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nothing => write!(f, "nothing"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n:?}"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::Callable(c) => write!(f, "<callable {}>", c.name()),
            Value::Container(c) => write!(f, "<container {}>", c.name()),
            Value::Object { container, .. } => write!(f, "<object {}>", container.name()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nothing, Value::Nothing) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => **a == **b,
            // Host values and closures compare by identity.
            (Value::Callable(a), Value::Callable(b)) => Heap::ptr_eq(a, b),
            (Value::Container(a), Value::Container(b)) => Heap::ptr_eq(a, b),
            (Value::Object { callable: a, .. }, Value::Object { callable: b, .. }) => {
                Heap::ptr_eq(a, b)
            }
            _ => false,
        }
    }
}
