//! Character classes shared by the scanner.

/// Space or tab. Insignificant everywhere outside string literals.
#[inline]
pub fn is_horizontal_space(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// `\n` or `\r`. Each terminator (with `\r\n` counted once) advances the line.
#[inline]
pub fn is_line_break(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

/// ASCII decimal digit.
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// First character of an identifier: a letter, `_` or `$`.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Subsequent identifier character: a letter, digit, `_` or `$`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
