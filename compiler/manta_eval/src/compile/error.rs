//! Compile error types.
//!
//! A compile error is always fatal to the `compile` call that raised it and
//! carries the 1-based line the scanner was on. Nothing has executed yet
//! when one is returned: compilation only decides structure.

use thiserror::Error;

/// Compilation failure with the line it was found on.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at line {line}")]
pub struct CompileError {
    /// 1-based line number.
    pub line: u32,
    /// What went wrong.
    pub kind: CompileErrorKind,
}

/// What kind of compile error occurred.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CompileErrorKind {
    /// `(` or `{` without a matching closer.
    #[error("unbalanced `{open}`")]
    UnbalancedDelimiter { open: char },

    /// Missing closing `"`.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A character that cannot appear at this position.
    #[error("invalid character {found:?}, expected {expected}")]
    InvalidCharacter {
        found: char,
        expected: &'static str,
    },

    /// Numeric literal that does not fit its type (`i64` overflow).
    #[error("invalid number literal `{literal}`")]
    InvalidNumber { literal: String },

    /// A `.` after the integer digits with nothing to complete it (`1.`).
    #[error("incomplete number literal, expected digit after `.`")]
    IncompleteNumber,

    /// `.` not followed by a member name.
    #[error("expected identifier after `.`, found {}", describe_found(.found))]
    ExpectedIdentifier { found: Option<char> },
}

#[allow(clippy::ref_option, reason = "thiserror passes fields by reference")]
fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{c:?}"),
        None => "end of input".to_owned(),
    }
}

impl CompileError {
    /// The message without the line suffix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    #[cold]
    pub fn unbalanced(line: u32, open: u8) -> Self {
        Self {
            line,
            kind: CompileErrorKind::UnbalancedDelimiter {
                open: char::from(open),
            },
        }
    }

    #[cold]
    pub fn unterminated_string(line: u32) -> Self {
        Self {
            line,
            kind: CompileErrorKind::UnterminatedString,
        }
    }

    #[cold]
    pub fn invalid_character(line: u32, found: char, expected: &'static str) -> Self {
        Self {
            line,
            kind: CompileErrorKind::InvalidCharacter { found, expected },
        }
    }

    #[cold]
    pub fn invalid_number(line: u32, literal: &str) -> Self {
        Self {
            line,
            kind: CompileErrorKind::InvalidNumber {
                literal: literal.to_owned(),
            },
        }
    }

    #[cold]
    pub fn incomplete_number(line: u32) -> Self {
        Self {
            line,
            kind: CompileErrorKind::IncompleteNumber,
        }
    }

    #[cold]
    pub fn expected_identifier(line: u32, found: Option<char>) -> Self {
        Self {
            line,
            kind: CompileErrorKind::ExpectedIdentifier { found },
        }
    }
}

#[cfg(test)]
mod tests;
