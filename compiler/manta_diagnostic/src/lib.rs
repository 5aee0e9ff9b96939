//! Diagnostic system for error reporting.
//!
//! - Error codes for searchability (`manta explain E0005`)
//! - Clear messages (what went wrong)
//! - Line location and a source snippet (where it went wrong)
//! - Notes and suggestions (context and how to fix)
//!
//! Compile errors and runtime errors are converted into [`Diagnostic`]s by
//! the CLI and rendered through a [`DiagnosticEmitter`](emitter::DiagnosticEmitter).

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
