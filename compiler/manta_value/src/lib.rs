//! Manta Value - the object model scripts operate on.
//!
//! This crate provides:
//! - Runtime values (`Value`): the literal kinds (`Str`, `Int`, `Float`),
//!   `Nothing`, and host- or closure-backed values exposing capabilities
//! - The two capabilities, [`Callable`] and [`Container`]
//! - Evaluation errors (`EvalError`, `EvalErrorKind`, `EvalResult`)
//! - Host helpers: [`NativeFn`] and [`Namespace`]
//!
//! # Capabilities
//!
//! Values are typed by what they can do, not by class. A script can invoke a
//! value only if it is [`Callable`] and look a name up on it only if it is a
//! [`Container`]. Asking a value for a capability it lacks is a
//! `MissingCapability` error, never a silent no-op.

mod errors;
mod value;

pub use errors::{
    host_error, missing_capability, undefined_name, Capability, EvalError, EvalErrorKind,
    EvalResult,
};
pub use value::{Callable, Container, Heap, Namespace, NativeFn, Value};
