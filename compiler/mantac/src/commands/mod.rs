//! Command handlers for the `manta` CLI.
//!
//! Each submodule implements one command. The `*_source` functions hold the
//! logic and return results; the `*_file` wrappers do the I/O and choose the
//! exit status.

mod check;
mod explain;
mod pipeline;
mod run;

pub use check::{check_file, check_source};
pub use explain::explain_error;
pub use pipeline::{pipeline_listing, print_pipeline};
pub use run::{eval_inline, evaluate_source, run_file};

use manta_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use manta_diagnostic::Diagnostic;

use crate::problem::read_error_to_diagnostic;

/// Read the script at `path`.
pub fn read_source(path: &str) -> Result<String, Diagnostic> {
    std::fs::read_to_string(path).map_err(|e| read_error_to_diagnostic(path, &e))
}

/// Read a source file, reporting E9001 and exiting if it cannot be read.
pub(super) fn read_file(path: &str, color: ColorMode) -> String {
    match read_source(path) {
        Ok(content) => content,
        Err(diag) => report_and_exit(&diag, "", path, color),
    }
}

/// Emit `diagnostic` to stderr with a snippet from `source`, then exit 1.
pub(super) fn report_and_exit(
    diagnostic: &Diagnostic,
    source: &str,
    path: &str,
    color: ColorMode,
) -> ! {
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let mut emitter = TerminalEmitter::stderr(color, is_tty)
        .with_source(source)
        .with_file_path(path);
    emitter.emit(diagnostic);
    emitter.emit_summary(1);
    emitter.flush();
    std::process::exit(1);
}
