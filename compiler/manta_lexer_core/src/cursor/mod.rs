//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position
//! has reached the source length, which distinguishes EOF from an
//! interior null byte.
//!
//! Unlike a plain tokenizer cursor this one also owns the line counter:
//! every method that can step over a line terminator goes through
//! [`Cursor::eat_newline`], so the line reported in a compile error is
//! always the line the cursor was on when the error was found.

/// Returns the earliest of two optional positions.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Byte range of the body of a balanced `(...)` or `{...}` span.
///
/// `start` is the first byte after the opening delimiter and `end` is the
/// position of the matching closing delimiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BalancedSpan {
    pub start: u32,
    pub end: u32,
}

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a snapshot taken before a speculative read can
/// be restored to back up, which the numeric literal scanner relies on.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`. This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content.
    source_len: u32,
    /// 1-based line of `pos`.
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0, line 1.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
            line: 1,
        }
    }

    /// Report lines starting from `line` instead of 1.
    #[must_use]
    pub(crate) fn with_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe at any position: the sentinel and padding guarantee a valid read.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Advance the cursor by one byte.
    ///
    /// Does not touch the line counter; use [`eat_newline`](Self::eat_newline)
    /// to step over terminators.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Current 1-based line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Length of the source content.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source content and on character
    /// boundaries. The scanner only slices at positions it reached by
    /// stepping whole characters, and the source was a `&str`.
    #[allow(
        unsafe_code,
        reason = "from_utf8_unchecked on source validated as &str at buffer construction"
    )]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        // SAFETY: The buffer was built from a `&str` and both bounds sit on
        // character boundaries (see contract above).
        unsafe { std::str::from_utf8_unchecked(&self.buf[start as usize..end as usize]) }
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// `pred(0)` must return `false` so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Decode the full character at the current position.
    ///
    /// Returns `'\0'` at EOF.
    pub fn current_char(&self) -> char {
        if self.is_eof() {
            return '\0';
        }
        let width = Self::utf8_char_width(self.current());
        let end = (self.pos + width).min(self.source_len);
        self.slice(self.pos, end).chars().next().unwrap_or('\0')
    }

    /// Advance the cursor past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Advance past spaces and tabs.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(crate::is_horizontal_space);
    }

    /// Consume one line terminator and bump the line counter.
    ///
    /// `\r\n` counts as a single terminator. Returns `false` (consuming
    /// nothing) when the current byte is not a terminator.
    pub fn eat_newline(&mut self) -> bool {
        match self.current() {
            b'\n' => {
                self.advance();
            }
            b'\r' => {
                self.advance();
                if self.current() == b'\n' {
                    self.advance();
                }
            }
            _ => return false,
        }
        self.line += 1;
        true
    }

    /// Advance past spaces, tabs and line terminators.
    pub fn eat_trivia(&mut self) {
        loop {
            self.eat_whitespace();
            if !self.eat_newline() {
                break;
            }
        }
    }

    /// Advance past ordinary string content to the next interesting byte.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// "Interesting" bytes for strings: `"`, `\`, `\n`, `\r`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        let primary = memchr::memchr3(b'"', b'\\', b'\n', remaining);
        let cr = memchr::memchr(b'\r', remaining);

        if let Some(off) = earliest_of(primary, cr) {
            self.pos += off as u32;
            self.buf[self.pos as usize]
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Skip a string literal whose opening quote is the current byte.
    ///
    /// Escapes are stepped over without being decoded. Returns `false` when
    /// EOF is reached before the closing quote.
    fn skip_string(&mut self) -> bool {
        self.advance();
        loop {
            match self.skip_to_string_delim() {
                b'"' => {
                    self.advance();
                    return true;
                }
                b'\\' => {
                    self.advance();
                    if self.is_eof() {
                        return false;
                    }
                    if !self.eat_newline() {
                        self.advance_char();
                    }
                }
                b'\n' | b'\r' => {
                    self.eat_newline();
                }
                _ => return false,
            }
        }
    }

    /// Extract the body of a balanced span whose opening delimiter is the
    /// current byte.
    ///
    /// Only `open`/`close` affect nesting depth; string literals inside the
    /// span are skipped whole so a quoted delimiter does not count. On
    /// success the cursor sits just past the matching `close`. Returns
    /// `None` when EOF is reached first.
    pub fn eat_balanced(&mut self, open: u8, close: u8) -> Option<BalancedSpan> {
        debug_assert_eq!(self.current(), open, "eat_balanced must start on `open`");
        self.advance();
        let start = self.pos;
        let mut depth = 0u32;
        loop {
            if self.is_eof() {
                return None;
            }
            let b = self.current();
            if b == close {
                if depth == 0 {
                    let end = self.pos;
                    self.advance();
                    return Some(BalancedSpan { start, end });
                }
                depth -= 1;
                self.advance();
            } else if b == open {
                depth += 1;
                self.advance();
            } else if b == b'"' {
                if !self.skip_string() {
                    return None;
                }
            } else if !self.eat_newline() {
                self.advance_char();
            }
        }
    }
}
