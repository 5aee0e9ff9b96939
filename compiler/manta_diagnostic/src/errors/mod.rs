//! Embedded error documentation for `explain` support.
//!
//! Each error code has a markdown file in this directory explaining the
//! error with an example and a fix. The files are embedded at compile time.
//!
//! # Adding New Documentation
//!
//! 1. Create a new file `EXXXX.md` in this directory
//! 2. Add an entry to the `DOCS` array below

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the markdown documentation for an error code, if any.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    /// Check if an error code has documentation.
    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Compile errors (E0xxx)
    (ErrorCode::E0001, include_str!("E0001.md")),
    (ErrorCode::E0002, include_str!("E0002.md")),
    (ErrorCode::E0003, include_str!("E0003.md")),
    (ErrorCode::E0004, include_str!("E0004.md")),
    (ErrorCode::E0005, include_str!("E0005.md")),
    (ErrorCode::E0006, include_str!("E0006.md")),
    // Runtime errors (E6xxx)
    (ErrorCode::E6001, include_str!("E6001.md")),
    (ErrorCode::E6002, include_str!("E6002.md")),
    (ErrorCode::E6003, include_str!("E6003.md")),
    // Driver errors (E9xxx)
    (ErrorCode::E9001, include_str!("E9001.md")),
];
