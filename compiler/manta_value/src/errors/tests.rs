use super::*;
use pretty_assertions::assert_eq;

#[test]
fn missing_capability_message() {
    let err = missing_capability(Capability::Container, "int");
    assert_eq!(err.message, "int is not a container");
    assert!(err.is_capability_error());
    assert!(!err.is_name_error());
}

#[test]
fn undefined_name_message() {
    let err = undefined_name("foo");
    assert_eq!(err.to_string(), "undefined name: foo");
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedName {
            name: "foo".to_string()
        }
    );
    assert!(err.is_name_error());
}

#[test]
fn host_error_keeps_message() {
    let err = host_error("queue is full");
    assert_eq!(err.message, "queue is full");
    assert!(!err.is_capability_error());
}

#[test]
fn notes_accumulate_innermost_first() {
    let err = undefined_name("x")
        .with_note("while running `lookup x`")
        .with_note("in closure");
    assert_eq!(err.notes, vec!["while running `lookup x`", "in closure"]);
}
