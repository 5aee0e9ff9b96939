//! Conversion of compile and runtime errors into diagnostics.
//!
//! The core error types carry only what went wrong and where. Codes, labels
//! and suggestions are presentation and live here.

use std::io;

use manta_diagnostic::{Diagnostic, ErrorCode};
use manta_eval::{CompileError, CompileErrorKind, EvalError, EvalErrorKind};

/// Render a compile error with its code, line label and fix.
#[cold]
pub fn compile_error_to_diagnostic(err: &CompileError) -> Diagnostic {
    let diag = Diagnostic::error(code_for_compile_error(&err.kind)).with_message(err.message());
    match &err.kind {
        CompileErrorKind::UnbalancedDelimiter { open } => {
            let close = if *open == '(' { ')' } else { '}' };
            diag.with_line(err.line, format!("`{open}` opened here is never closed"))
                .with_suggestion(format!("add the missing `{close}`"))
        }
        CompileErrorKind::UnterminatedString => diag
            .with_line(err.line, "string starts here")
            .with_suggestion("add a closing `\"`"),
        CompileErrorKind::InvalidCharacter { expected, .. } => {
            diag.with_line(err.line, format!("expected {expected}"))
        }
        CompileErrorKind::InvalidNumber { .. } => diag
            .with_line(err.line, "integer literal out of range")
            .with_note("integers are signed 64-bit"),
        CompileErrorKind::IncompleteNumber => diag
            .with_line(err.line, "digit expected after `.`")
            .with_suggestion("write a fraction like `1.0`, or drop the `.`"),
        CompileErrorKind::ExpectedIdentifier { found } => {
            let diag = diag.with_line(err.line, "member name expected");
            // `1.5.3`: the float ends at its second `.`, which starts a member access.
            if found.is_some_and(|c| c.is_ascii_digit()) {
                diag.with_note(
                    "a number literal has at most one `.`; the next `.` starts a member access",
                )
            } else {
                diag
            }
        }
    }
}

/// Error code for a compile error kind.
pub fn code_for_compile_error(kind: &CompileErrorKind) -> ErrorCode {
    match kind {
        CompileErrorKind::UnterminatedString => ErrorCode::E0001,
        CompileErrorKind::InvalidCharacter { .. } => ErrorCode::E0002,
        CompileErrorKind::InvalidNumber { .. } => ErrorCode::E0003,
        CompileErrorKind::IncompleteNumber => ErrorCode::E0004,
        CompileErrorKind::UnbalancedDelimiter { .. } => ErrorCode::E0005,
        CompileErrorKind::ExpectedIdentifier { .. } => ErrorCode::E0006,
    }
}

/// Render a failure to read the script at `path`.
#[cold]
pub fn read_error_to_diagnostic(path: &str, err: &io::Error) -> Diagnostic {
    let message = match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    };
    Diagnostic::error(ErrorCode::E9001).with_message(message)
}

/// Render a runtime error, carrying its propagation notes.
#[cold]
pub fn eval_error_to_diagnostic(err: &EvalError) -> Diagnostic {
    let code = match &err.kind {
        EvalErrorKind::MissingCapability { .. } => ErrorCode::E6001,
        EvalErrorKind::UndefinedName { .. } => ErrorCode::E6002,
        EvalErrorKind::Host { .. } => ErrorCode::E6003,
    };
    let mut diag = Diagnostic::error(code).with_message(&err.message);
    for note in &err.notes {
        diag = diag.with_note(note);
    }
    if let EvalErrorKind::UndefinedName { .. } = err.kind {
        diag = diag.with_suggestion("names without a `.` are looked up on the receiver");
    }
    diag
}
