//! The compiled, reusable unit returned by [`compile`](crate::compile).

use manta_value::{EvalResult, Value};

use crate::{Closure, EvalContext, Pipeline};

/// A compiled program.
///
/// Compilation happens once; evaluation may happen any number of times,
/// each on a fresh [`EvalContext`]. Programs are `Send + Sync` and cheap to
/// clone, but a single run is synchronous and owns its context.
#[derive(Clone, Debug)]
pub struct Program {
    pipeline: Pipeline,
}

impl Program {
    pub(crate) fn new(pipeline: Pipeline) -> Self {
        Program { pipeline }
    }

    /// Run against `receiver` and return the committed results in slot
    /// order.
    ///
    /// When `args` is non-empty its first element is the receiver instead,
    /// the same rebinding a closure call performs.
    pub fn evaluate(&self, receiver: Value, args: &[Value]) -> EvalResult<Vec<Value>> {
        let receiver = args.first().cloned().unwrap_or(receiver);
        self.run(receiver)
    }

    /// Run against `receiver` with no arguments.
    pub fn run(&self, receiver: Value) -> EvalResult<Vec<Value>> {
        manta_stack::ensure_sufficient_stack(|| {
            let mut ctx = EvalContext::new(receiver);
            self.pipeline.run(&mut ctx)?;
            Ok(ctx.into_results())
        })
    }

    /// The composed steps.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// A callable value running this program against `receiver`, or against
    /// its first argument when called with any.
    pub fn into_closure(self, receiver: Value) -> Value {
        Closure::new(self.pipeline, receiver).into_value()
    }
}
