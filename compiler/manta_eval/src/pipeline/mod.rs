//! Pipeline builder: straight-line composition of context transformations.
//!
//! The compiler emits one [`Step`] per token that affects evaluation, in
//! source order. The grammar has no branching, so a pipeline is just the
//! steps applied one after another to an [`EvalContext`].
//!
//! # Primitives
//!
//! | Kind | Effect on the context |
//! |------|-----------------------|
//! | [`StepKind::Replace`] | current value := a fixed value |
//! | [`StepKind::Map`] | current value := `f(context, current)` |
//! | [`StepKind::Splice`] | current value := all of `f(context, current)`, in order |
//! | [`StepKind::Modify`] | arbitrary `f(&mut context)` (slot bookkeeping) |
//!
//! Every step carries a label so a pipeline can be listed and so tracing
//! and error notes name the step that failed.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use manta_value::{EvalResult, Value};

use crate::EvalContext;

/// Context-dependent replacement of the current value.
pub type MapFn = dyn Fn(&EvalContext, Value) -> EvalResult<Value> + Send + Sync;

/// Context-dependent replacement of the current value by a sequence.
pub type SpliceFn = dyn Fn(&EvalContext, Value) -> EvalResult<Vec<Value>> + Send + Sync;

/// Generic context transform.
pub type ModifyFn = dyn Fn(&mut EvalContext) -> EvalResult<()> + Send + Sync;

/// What a step does.
pub enum StepKind {
    Replace(Value),
    Map(Box<MapFn>),
    Splice(Box<SpliceFn>),
    Modify(Box<ModifyFn>),
}

/// One labelled transformation.
pub struct Step {
    label: Cow<'static, str>,
    kind: StepKind,
}

impl Step {
    /// Human-readable description, e.g. `lookup queue` or `call (3 steps)`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The step's effect.
    pub fn kind(&self) -> &StepKind {
        &self.kind
    }

    /// Apply the step to `ctx`.
    pub fn apply(&self, ctx: &mut EvalContext) -> EvalResult<()> {
        match &self.kind {
            StepKind::Replace(value) => {
                ctx.replace(value.clone());
            }
            StepKind::Map(f) => {
                let current = ctx.take_current();
                let value = f(ctx, current)?;
                ctx.push(value);
            }
            StepKind::Splice(f) => {
                let current = ctx.take_current();
                let values = f(ctx, current)?;
                ctx.extend(values);
            }
            StepKind::Modify(f) => f(ctx)?,
        }
        Ok(())
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            StepKind::Replace(_) => "Replace",
            StepKind::Map(_) => "Map",
            StepKind::Splice(_) => "Splice",
            StepKind::Modify(_) => "Modify",
        };
        write!(f, "{kind}({})", self.label)
    }
}

/// Accumulates steps in source order.
#[derive(Default)]
pub struct PipelineBuilder {
    steps: Vec<Step>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, label: impl Into<Cow<'static, str>>, kind: StepKind) -> &mut Self {
        self.steps.push(Step {
            label: label.into(),
            kind,
        });
        self
    }

    /// Unconditional replacement of the current value.
    pub fn replace(&mut self, label: impl Into<Cow<'static, str>>, value: Value) -> &mut Self {
        self.push(label, StepKind::Replace(value))
    }

    /// Replacement computed from the live context and the current value.
    pub fn map(
        &mut self,
        label: impl Into<Cow<'static, str>>,
        f: impl Fn(&EvalContext, Value) -> EvalResult<Value> + Send + Sync + 'static,
    ) -> &mut Self {
        self.push(label, StepKind::Map(Box::new(f)))
    }

    /// Replacement of the current value by every produced value, in order.
    pub fn splice(
        &mut self,
        label: impl Into<Cow<'static, str>>,
        f: impl Fn(&EvalContext, Value) -> EvalResult<Vec<Value>> + Send + Sync + 'static,
    ) -> &mut Self {
        self.push(label, StepKind::Splice(Box::new(f)))
    }

    /// Arbitrary context transform.
    pub fn modify(
        &mut self,
        label: impl Into<Cow<'static, str>>,
        f: impl Fn(&mut EvalContext) -> EvalResult<()> + Send + Sync + 'static,
    ) -> &mut Self {
        self.push(label, StepKind::Modify(Box::new(f)))
    }

    /// End the slot, committing the pending values.
    pub fn commit(&mut self) -> &mut Self {
        self.modify("commit", |ctx| {
            ctx.commit();
            Ok(())
        })
    }

    /// Rebind the focus to the receiver without committing.
    pub fn reset(&mut self) -> &mut Self {
        self.modify("reset", |ctx| {
            ctx.reset();
            Ok(())
        })
    }

    /// Number of steps so far.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` when no step was emitted.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Freeze into an immutable, cheaply clonable pipeline.
    pub fn build(self) -> Pipeline {
        Pipeline {
            steps: self.steps.into(),
        }
    }
}

/// A composed, immutable sequence of steps.
///
/// Cloning shares the steps, so closures created from the same block share
/// one compiled body.
#[derive(Clone)]
pub struct Pipeline {
    steps: Arc<[Step]>,
}

impl Pipeline {
    /// Apply every step to `ctx`, in order, stopping at the first error.
    ///
    /// The failing step's label is attached to the error as a note.
    pub fn run(&self, ctx: &mut EvalContext) -> EvalResult<()> {
        for step in self.steps.iter() {
            tracing::trace!(step = step.label(), "apply");
            step.apply(ctx)
                .map_err(|e| e.with_note(format!("while running `{}`", step.label())))?;
        }
        Ok(())
    }

    /// The steps, in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Step labels, in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.steps.iter().map(Step::label)
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` for a pipeline with no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.steps.iter()).finish()
    }
}
