//! The `check` command: compile without evaluating.

use manta_diagnostic::emitter::ColorMode;
use manta_diagnostic::Diagnostic;

use crate::problem::compile_error_to_diagnostic;

use super::{read_file, report_and_exit};

/// Compile `source`, returning the number of pipeline steps.
pub fn check_source(source: &str) -> Result<usize, Diagnostic> {
    manta_eval::compile(source)
        .map(|program| program.pipeline().len())
        .map_err(|e| compile_error_to_diagnostic(&e))
}

/// Check that a file compiles.
pub fn check_file(path: &str, color: ColorMode) {
    let source = read_file(path, color);
    match check_source(&source) {
        Ok(steps) => println!("{path}: ok ({steps} step{})", if steps == 1 { "" } else { "s" }),
        Err(diag) => report_and_exit(&diag, &source, path, color),
    }
}
