use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_appends_line() {
    let err = CompileError::unbalanced(3, b'(');
    assert_eq!(err.to_string(), "unbalanced `(` at line 3");
    assert_eq!(err.message(), "unbalanced `(`");
}

#[test]
fn invalid_character_names_expectation() {
    let err = CompileError::invalid_character(1, '#', "a value");
    assert_eq!(err.to_string(), "invalid character '#', expected a value at line 1");
}

#[test]
fn expected_identifier_at_end_of_input() {
    assert_eq!(
        CompileError::expected_identifier(2, None).message(),
        "expected identifier after `.`, found end of input"
    );
    assert_eq!(
        CompileError::expected_identifier(2, Some('3')).message(),
        "expected identifier after `.`, found '3'"
    );
}

#[test]
fn number_errors() {
    assert_eq!(
        CompileError::invalid_number(1, "99999999999999999999").message(),
        "invalid number literal `99999999999999999999`"
    );
    assert_eq!(
        CompileError::incomplete_number(1).kind,
        CompileErrorKind::IncompleteNumber
    );
}
