//! String and numeric literal scanning.
//!
//! Both scanners start on the literal's first byte and leave the cursor on
//! the first byte after it. Neither consumes the terminator that ends a
//! number: `,`, `;` and trivia belong to the slot scanner, and a `.` left
//! behind is reprocessed as a member-access trailer.

use std::borrow::Cow;

use manta_lexer_core::{is_digit, is_horizontal_space, is_line_break, Cursor};

use super::CompileError;

/// Value of a numeric literal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) enum Number {
    Int(i64),
    Float(f64),
}

/// Scan a string literal whose opening `"` is the current byte.
///
/// Returns the raw content between the quotes, escapes undecoded. Errors
/// report the line of the opening quote.
pub(super) fn scan_string<'a>(cursor: &mut Cursor<'a>) -> Result<&'a str, CompileError> {
    let line = cursor.line();
    cursor.advance();
    let start = cursor.pos();
    loop {
        match cursor.skip_to_string_delim() {
            b'"' => {
                let content = cursor.slice_from(start);
                cursor.advance();
                return Ok(content);
            }
            b'\\' => {
                cursor.advance();
                if cursor.is_eof() {
                    return Err(CompileError::unterminated_string(line));
                }
                if !cursor.eat_newline() {
                    cursor.advance_char();
                }
            }
            b'\n' | b'\r' => {
                cursor.eat_newline();
            }
            _ => return Err(CompileError::unterminated_string(line)),
        }
    }
}

/// Decode the escapes in a string literal's content.
///
/// `\n`, `\r` and `\t` map to their control characters; any other escaped
/// character stands for itself. Content without a backslash is borrowed.
pub(super) fn unescape(content: &str) -> Cow<'_, str> {
    if !content.contains('\\') {
        return Cow::Borrowed(content);
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some(other) => result.push(other),
            None => {}
        }
    }
    Cow::Owned(result)
}

/// Bytes that end a numeric literal without being part of it.
#[inline]
fn ends_number(cursor: &Cursor<'_>) -> bool {
    let b = cursor.current();
    cursor.is_eof() || is_horizontal_space(b) || is_line_break(b) || b == b',' || b == b';'
}

/// Scan a numeric literal whose first digit is the current byte.
///
/// After the integer digits a `.` followed by a letter or `_` is member
/// access on the integer: the cursor is left on the `.`. Otherwise the `.`
/// starts a fraction. A second `.` after the fraction ends the literal and
/// is left for the trailer scanner.
pub(super) fn scan_number(cursor: &mut Cursor<'_>) -> Result<Number, CompileError> {
    let line = cursor.line();
    let start = cursor.pos();
    cursor.eat_while(is_digit);

    if cursor.current() == b'.' {
        let mut probe = *cursor;
        probe.advance();
        let next = probe.current_char();

        if next.is_alphabetic() || next == '_' {
            return parse_int(cursor.slice_from(start), line);
        }
        if next == '.' {
            return Err(CompileError::invalid_character(
                line,
                next,
                "digit or member name after `.`",
            ));
        }
        if ends_number(&probe) {
            return Err(CompileError::incomplete_number(line));
        }
        if !next.is_ascii_digit() {
            return Err(CompileError::invalid_character(line, next, "digit"));
        }

        *cursor = probe;
        cursor.eat_while(is_digit);
        let literal = cursor.slice_from(start);
        if cursor.current() != b'.' && !ends_number(cursor) {
            return Err(CompileError::invalid_character(
                line,
                cursor.current_char(),
                "digit, `.` or separator",
            ));
        }
        return literal
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| CompileError::invalid_number(line, literal));
    }

    if !ends_number(cursor) {
        return Err(CompileError::invalid_character(
            line,
            cursor.current_char(),
            "digit, `.` or separator",
        ));
    }
    parse_int(cursor.slice_from(start), line)
}

fn parse_int(literal: &str, line: u32) -> Result<Number, CompileError> {
    literal
        .parse::<i64>()
        .map(Number::Int)
        .map_err(|_| CompileError::invalid_number(line, literal))
}
