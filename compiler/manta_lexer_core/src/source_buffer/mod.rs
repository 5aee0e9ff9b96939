//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the cursor detects EOF without explicit bounds checking. The total
//! buffer size is rounded up to the next 64-byte boundary, which also leaves
//! safe padding for [`Cursor::peek`](crate::Cursor::peek) near the end.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated copy of a Manta source.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// Nested `(...)` and `{...}` bodies get their own buffer: the compiler
/// extracts the body text and scans it with a cursor that starts at the
/// line of the opening delimiter.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source text.
    ///
    /// Sources larger than `u32::MAX` bytes saturate `source_len`; scripts
    /// for this language are expected to be a few lines long.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0 on line 1.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Create a [`Cursor`] positioned at byte 0 that reports lines starting
    /// at `first_line`.
    ///
    /// Used when scanning an extracted nested body, so diagnostics inside
    /// it still carry lines of the enclosing source.
    pub fn cursor_at_line(&self, first_line: u32) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len).with_line(first_line)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
