//! Error codes for all Manta diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E0001`) with the first digit
//! indicating the phase. Used for `explain` lookups and documentation.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Compile errors (scanner/compiler)
/// - E6xxx: Runtime / evaluation errors
/// - E9xxx: Driver errors (I/O, usage)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Compile Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Invalid number literal
    E0003,
    /// Incomplete number literal (`1.`)
    E0004,
    /// Unbalanced delimiter
    E0005,
    /// Expected identifier after `.`
    E0006,

    // Runtime Errors (E6xxx)
    /// Value lacks a required capability
    E6001,
    /// Undefined name in container lookup
    E6002,
    /// Error raised by a host callable or container
    E6003,

    // Driver Errors (E9xxx)
    /// Source file could not be read
    E9001,
}

impl ErrorCode {
    /// Every error code, in declaration order.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E9001,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Check if this is a compile-phase error.
    pub fn is_compile_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E0001
                | ErrorCode::E0002
                | ErrorCode::E0003
                | ErrorCode::E0004
                | ErrorCode::E0005
                | ErrorCode::E0006
        )
    }

    /// Check if this is a runtime error.
    pub fn is_runtime_error(&self) -> bool {
        matches!(self, ErrorCode::E6001 | ErrorCode::E6002 | ErrorCode::E6003)
    }

    /// Check if this is a driver error.
    pub fn is_driver_error(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E0005"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
