//! The `run` and `eval` commands: compile a program and evaluate it against
//! the prelude.

use manta_diagnostic::Diagnostic;
use manta_eval::Value;

use crate::prelude::{prelude, render};
use crate::problem::{compile_error_to_diagnostic, eval_error_to_diagnostic};
use crate::RunOptions;

use super::{read_file, report_and_exit};

/// Compile and evaluate `source` against the receiver `options` selects.
///
/// Program arguments reach the script through the prelude's `args`
/// callable; they do not rebind the receiver.
pub fn evaluate_source(source: &str, options: &RunOptions) -> Result<Vec<Value>, Diagnostic> {
    let program = manta_eval::compile(source).map_err(|e| compile_error_to_diagnostic(&e))?;

    let root = prelude(&options.args);
    let receiver = match &options.receiver {
        Some(name) => root.lookup(name).map_err(|e| {
            eval_error_to_diagnostic(&e).with_note(format!("selected by `--receiver={name}`"))
        })?,
        None => root,
    };

    tracing::debug!(
        receiver = receiver.type_name(),
        args = options.args.len(),
        "evaluating"
    );
    program
        .run(receiver)
        .map_err(|e| eval_error_to_diagnostic(&e))
}

fn print_results(results: &[Value]) {
    for value in results.iter().filter(|v| !v.is_nothing()) {
        println!("{}", render(value));
    }
}

/// Run a source file and print its non-nothing results, one per line.
pub fn run_file(path: &str, options: &RunOptions) {
    let source = read_file(path, options.color);
    match evaluate_source(&source, options) {
        Ok(results) => print_results(&results),
        Err(diag) => report_and_exit(&diag, &source, path, options.color),
    }
}

/// Evaluate source given on the command line.
pub fn eval_inline(source: &str, options: &RunOptions) {
    match evaluate_source(source, options) {
        Ok(results) => print_results(&results),
        Err(diag) => report_and_exit(&diag, source, "<eval>", options.color),
    }
}
