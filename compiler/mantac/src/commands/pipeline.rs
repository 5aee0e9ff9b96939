//! The `pipeline` command: list the steps a program compiles to.

use std::fmt::Write;

use manta_diagnostic::emitter::ColorMode;
use manta_diagnostic::Diagnostic;

use crate::problem::compile_error_to_diagnostic;

use super::{read_file, report_and_exit};

/// Numbered step labels of the compiled `source`, one per line.
pub fn pipeline_listing(source: &str) -> Result<String, Diagnostic> {
    let program = manta_eval::compile(source).map_err(|e| compile_error_to_diagnostic(&e))?;
    let steps = program.pipeline();
    let width = steps.len().to_string().len();
    let mut out = String::new();
    for (i, label) in steps.labels().enumerate() {
        let _ = writeln!(out, "{:>width$}  {label}", i + 1);
    }
    Ok(out)
}

/// Print the step listing of a file.
pub fn print_pipeline(path: &str, color: ColorMode) {
    let source = read_file(path, color);
    match pipeline_listing(&source) {
        Ok(listing) => print!("{listing}"),
        Err(diag) => report_and_exit(&diag, &source, path, color),
    }
}
