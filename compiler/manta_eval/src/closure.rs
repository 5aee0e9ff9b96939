//! Closures produced by `{...}` blocks.

use std::fmt;

use manta_value::{Callable, EvalResult, Value};

use crate::{EvalContext, Pipeline};

/// A compiled block bound to the receiver live where it was created.
///
/// The language has no named locals, so the receiver is the only thing a
/// closure captures. Invoking it with arguments rebinds the receiver to the
/// first argument for that call.
#[derive(Clone)]
pub struct Closure {
    body: Pipeline,
    receiver: Value,
}

impl Closure {
    pub fn new(body: Pipeline, receiver: Value) -> Self {
        Closure { body, receiver }
    }

    /// Wrap as a callable value.
    pub fn into_value(self) -> Value {
        Value::callable(self)
    }
}

impl Callable for Closure {
    fn invoke(&self, args: &[Value]) -> EvalResult<Vec<Value>> {
        let receiver = args.first().unwrap_or(&self.receiver).clone();
        tracing::debug!(
            args = args.len(),
            rebound = !args.is_empty(),
            steps = self.body.len(),
            "invoke closure"
        );
        manta_stack::ensure_sufficient_stack(|| {
            let mut ctx = EvalContext::new(receiver);
            self.body.run(&mut ctx)?;
            Ok(ctx.into_results())
        })
    }

    fn name(&self) -> &str {
        "closure"
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("steps", &self.body.len())
            .field("receiver", &self.receiver)
            .finish()
    }
}
