//! Runtime error types.
//!
//! Two failures are raised by the core itself: a value lacking a required
//! capability, and a container lookup miss. Host callables report their own
//! failures through [`host_error`]. None of them are caught or retried by
//! the evaluator; they propagate out of `Program::evaluate` unchanged.
//!
//! Factory functions are the public constructors. They populate both `kind`
//! and `message`.

use std::fmt;

use thiserror::Error;

/// Result of evaluation.
pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

/// A capability a value may expose.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Invocation with ordered arguments.
    Callable,
    /// Name-based lookup.
    Container,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Callable => write!(f, "callable"),
            Capability::Container => write!(f, "container"),
        }
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    /// The operation needs `capability` but the value lacks it.
    #[error("{type_name} is not {}", article(.capability))]
    MissingCapability {
        capability: Capability,
        type_name: String,
    },

    /// Container lookup found nothing under `name`.
    #[error("undefined name: {name}")]
    UndefinedName { name: String },

    /// Failure reported by a host-supplied callable or container.
    #[error("{message}")]
    Host { message: String },
}

fn article(capability: &Capability) -> &'static str {
    match capability {
        Capability::Callable => "a callable",
        Capability::Container => "a container",
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message (`kind.to_string()` for factory errors).
    pub message: String,
    /// Context added while the error propagated, innermost first.
    pub notes: Vec<String>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            notes: Vec::new(),
        }
    }

    /// Attach a context note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// `true` for the CapabilityError family.
    pub fn is_capability_error(&self) -> bool {
        matches!(self.kind, EvalErrorKind::MissingCapability { .. })
    }

    /// `true` for the NameError family.
    pub fn is_name_error(&self) -> bool {
        matches!(self.kind, EvalErrorKind::UndefinedName { .. })
    }
}

/// A value was used as `capability` but does not expose it.
#[cold]
pub fn missing_capability(capability: Capability, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingCapability {
        capability,
        type_name: type_name.to_string(),
    })
}

/// Container lookup miss.
#[cold]
pub fn undefined_name(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedName {
        name: name.to_string(),
    })
}

/// Failure raised by host code.
#[cold]
pub fn host_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Host {
        message: message.into(),
    })
}

#[cfg(test)]
mod tests;
