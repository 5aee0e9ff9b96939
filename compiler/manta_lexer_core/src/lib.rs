//! Low-level scanning primitives for Manta source text.
//!
//! The Manta compiler is a single left-to-right pass that parses and emits
//! pipeline steps at the same time, so there is no token stream here. This
//! crate supplies what that pass needs underneath it:
//!
//! - [`SourceBuffer`]: sentinel-terminated copy of the source, so the cursor
//!   can read one byte past the end without bounds checks.
//! - [`Cursor`]: a `Copy` byte cursor that also tracks the 1-based line number
//!   used in compile diagnostics, skips trivia, and extracts balanced
//!   `(...)` / `{...}` spans.
//! - Character classes for identifiers and digits.

mod chars;
mod cursor;
mod source_buffer;

pub use chars::{is_digit, is_horizontal_space, is_ident_continue, is_ident_start, is_line_break};
pub use cursor::{BalancedSpan, Cursor};
pub use source_buffer::SourceBuffer;
