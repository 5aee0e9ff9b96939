//! Manta Eval - compiler and evaluator for the Manta expression language.
//!
//! Source text is compiled in a single left-to-right pass straight into a
//! [`Pipeline`]: a flat sequence of context transformations. There is no
//! syntax tree. A compiled [`Program`] can then be evaluated any number of
//! times against different receivers, each run on a fresh [`EvalContext`].
//!
//! ```text
//! let program = manta_eval::compile("player.name, queue.add(\"song\")")?;
//! let results = program.evaluate(host_root, &[])?;
//! ```
//!
//! # Modules
//!
//! - [`context`]: receiver, focus, and committed results of one run
//! - [`pipeline`]: step primitives and their straight-line composition
//! - [`compile`]: the scanner/compiler and its errors
//! - [`closure`]: callables produced by `{...}` blocks
//! - [`program`]: the public compiled unit

pub mod closure;
pub mod compile;
pub mod context;
pub mod pipeline;
pub mod program;

pub use closure::Closure;
pub use compile::{compile, CompileError, CompileErrorKind};
pub use context::EvalContext;
pub use pipeline::{Pipeline, PipelineBuilder, Step, StepKind};
pub use program::Program;

pub use manta_value::{
    Callable, Capability, Container, EvalError, EvalErrorKind, EvalResult, Namespace, NativeFn,
    Value,
};
