//! Diagnostic emitters.
//!
//! Each emitter implements [`DiagnosticEmitter`]. The terminal emitter is the
//! only output format: colored, human-readable text.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit the closing `aborting due to ...` line.
    fn emit_summary(&mut self, error_count: usize);
}
