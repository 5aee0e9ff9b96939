use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_builder() {
    let diag = Diagnostic::error(ErrorCode::E0005)
        .with_message("unbalanced `(`")
        .with_line(2, "opened here")
        .with_note("nested spans are matched before compiling")
        .with_suggestion("add the missing `)`");

    assert_eq!(diag.code, ErrorCode::E0005);
    assert_eq!(diag.line, Some(2));
    assert_eq!(diag.label.as_deref(), Some("opened here"));
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions, vec!["add the missing `)`"]);
}

#[test]
fn test_display() {
    let diag = Diagnostic::error(ErrorCode::E6002).with_message("undefined name: foo");
    assert_eq!(diag.to_string(), "error[E6002]: undefined name: foo");

    let diag = Diagnostic::error(ErrorCode::E0002)
        .with_message("invalid character")
        .with_line(4, "here");
    assert_eq!(diag.to_string(), "error[E0002]: invalid character (line 4)");
}
