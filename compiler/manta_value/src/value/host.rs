//! Ready-made capability implementations for hosts.
//!
//! A host can implement [`Callable`] and [`Container`] on its own types;
//! these cover the common cases of "a named Rust function" and "a fixed set
//! of named values".

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::{Callable, Container, Value};
use crate::EvalResult;

type NativeFnBody = dyn Fn(&[Value]) -> EvalResult<Vec<Value>> + Send + Sync;

/// A named Rust closure exposed as a [`Callable`].
#[derive(Clone)]
pub struct NativeFn {
    name: String,
    body: Arc<NativeFnBody>,
}

impl NativeFn {
    /// Create a native function.
    ///
    /// ```text
    /// let twice = NativeFn::new("twice", |args| Ok([args, args].concat()));
    /// ```
    pub fn new(
        name: impl Into<String>,
        body: impl Fn(&[Value]) -> EvalResult<Vec<Value>> + Send + Sync + 'static,
    ) -> Self {
        NativeFn {
            name: name.into(),
            body: Arc::new(body),
        }
    }
}

impl Callable for NativeFn {
    fn invoke(&self, args: &[Value]) -> EvalResult<Vec<Value>> {
        (self.body)(args)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFn({})", self.name)
    }
}

/// A named, fixed map of names to values exposed as a [`Container`].
#[derive(Clone, Default)]
pub struct Namespace {
    name: String,
    entries: FxHashMap<String, Value>,
}

impl Namespace {
    /// Create an empty namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Namespace {
            name: name.into(),
            entries: FxHashMap::default(),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    /// Bind `key`, replacing any previous binding.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when there are no bindings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Container for Namespace {
    fn get(&self, name: &str) -> Option<Value> {
        self.entries.get(name).cloned()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Namespace")
            .field("name", &self.name)
            .field("names", &self.names())
            .finish()
    }
}
