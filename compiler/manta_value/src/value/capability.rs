//! The two capabilities a value can expose to scripts.

use crate::{EvalResult, Value};

/// Capability for invocation with an ordered argument sequence.
///
/// Implemented by host functions ([`NativeFn`](super::NativeFn) or any
/// host type) and by closures compiled from `{...}` blocks. Invocation is
/// synchronous and happens on the evaluating thread.
pub trait Callable: Send + Sync {
    /// Invoke with `args`, producing an ordered result sequence.
    ///
    /// Results are spliced positionally into the caller's pending output,
    /// so returning several values yields several values at the call site
    /// and returning none yields none.
    fn invoke(&self, args: &[Value]) -> EvalResult<Vec<Value>>;

    /// Name shown in diagnostics and `Display`.
    fn name(&self) -> &str {
        "callable"
    }
}

/// Capability for name-based lookup.
pub trait Container: Send + Sync {
    /// Look `name` up. `None` becomes an `UndefinedName` error at the use site.
    fn get(&self, name: &str) -> Option<Value>;

    /// Name shown in diagnostics and `Display`.
    fn name(&self) -> &str {
        "container"
    }
}
