//! Command logic and diagnostic rendering, without process I/O.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use manta_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use manta_diagnostic::{Diagnostic, ErrorCode, ErrorDocs};
use manta_eval::Value;
use mantac::commands::{check_source, evaluate_source, pipeline_listing, read_source};
use mantac::prelude::render;
use mantac::RunOptions;
use pretty_assertions::assert_eq;

fn with_args(args: &[&str]) -> RunOptions {
    RunOptions {
        args: args.iter().map(ToString::to_string).collect(),
        ..RunOptions::default()
    }
}

fn rendered(diag: &Diagnostic, source: &str) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false)
        .with_source(source)
        .with_file_path("test.manta");
    emitter.emit(diag);
    emitter.flush();
    drop(emitter);
    String::from_utf8(output).unwrap()
}

#[test]
fn evaluates_against_the_prelude() {
    let results = evaluate_source(
        r#"concat("a", 1, 2.5), identity(1, 2), count(), env.name"#,
        &RunOptions::default(),
    )
    .unwrap();
    assert_eq!(
        results,
        vec![
            Value::string("a12.5"),
            Value::int(1),
            Value::int(2),
            Value::int(0),
            Value::string("manta"),
        ]
    );
}

#[test]
fn program_arguments_through_args() {
    let results = evaluate_source("count(args()), args()", &with_args(&["x", "y"])).unwrap();
    assert_eq!(
        results,
        vec![Value::int(2), Value::string("x"), Value::string("y")]
    );
}

#[test]
fn receiver_option_selects_prelude_entry() {
    let options = RunOptions {
        receiver: Some("env".to_string()),
        ..RunOptions::default()
    };
    assert_eq!(
        evaluate_source("name", &options).unwrap(),
        vec![Value::string("manta")]
    );

    let options = RunOptions {
        receiver: Some("nope".to_string()),
        ..RunOptions::default()
    };
    let diag = evaluate_source("this", &options).unwrap_err();
    assert_eq!(diag.code, ErrorCode::E6002);
    assert_eq!(diag.notes, vec!["selected by `--receiver=nope`"]);
}

#[test]
fn render_prints_strings_raw() {
    assert_eq!(render(&Value::string("hi")), "hi");
    assert_eq!(render(&Value::int(3)), "3");
    assert_eq!(render(&Value::float(1.0)), "1.0");
}

#[test]
fn compile_error_becomes_located_diagnostic() {
    let source = "print(1),\n  count(\n";
    let diag = evaluate_source(source, &RunOptions::default()).unwrap_err();
    assert_eq!(diag.code, ErrorCode::E0005);
    assert_eq!(diag.line, Some(2));
    assert_eq!(
        rendered(&diag, source),
        "error[E0005]: unbalanced `(`\n \
         --> test.manta:2\n  \
         |\n\
         2 |   count(\n  \
         |   ^^^^^^ `(` opened here is never closed\n  \
         |\n  \
         = help: add the missing `)`\n\n"
    );
}

#[test]
fn runtime_error_keeps_notes() {
    let diag = evaluate_source("env.name()", &RunOptions::default()).unwrap_err();
    assert_eq!(diag.code, ErrorCode::E6001);
    assert_eq!(diag.line, None);
    assert_eq!(
        rendered(&diag, "env.name()"),
        "error[E6001]: str is not a callable\n  = note: while running `call ()`\n\n"
    );
}

#[test]
fn undefined_name_suggests_receiver_lookup() {
    let diag = evaluate_source("nothing_here", &RunOptions::default()).unwrap_err();
    assert_eq!(diag.code, ErrorCode::E6002);
    assert_eq!(
        diag.suggestions,
        vec!["names without a `.` are looked up on the receiver"]
    );
}

#[test]
fn every_compile_error_code_is_documented() {
    for source in ["\"open", "#", "99999999999999999999", "1.", "(", "a."] {
        let diag = check_source(source).unwrap_err();
        assert!(diag.code.is_compile_error(), "{source}");
        assert!(ErrorDocs::has_docs(diag.code), "{source}");
    }
}

#[test]
fn second_dot_in_float_explains_member_access() {
    let diag = check_source("1.5.3").unwrap_err();
    assert_eq!(diag.code, ErrorCode::E0006);
    assert_eq!(
        diag.notes,
        vec!["a number literal has at most one `.`; the next `.` starts a member access"]
    );
}

#[test]
fn missing_member_name_has_no_float_note() {
    for source in ["a.", "this.(x)", "env. ,"] {
        let diag = check_source(source).unwrap_err();
        assert_eq!(diag.code, ErrorCode::E0006, "{source}");
        assert!(diag.notes.is_empty(), "{source}: {:?}", diag.notes);
    }
}

#[test]
fn unreadable_file_is_a_driver_diagnostic() {
    let path = "no/such/dir/missing.manta";
    let diag = read_source(path).unwrap_err();
    assert_eq!(diag.code, ErrorCode::E9001);
    assert_eq!(diag.message, "cannot find file 'no/such/dir/missing.manta'");
    assert_eq!(diag.line, None);
    assert!(ErrorDocs::has_docs(diag.code));
    assert_eq!(
        rendered(&diag, ""),
        "error[E9001]: cannot find file 'no/such/dir/missing.manta'\n\n"
    );
}

#[test]
fn check_counts_steps() {
    assert_eq!(check_source("1, 2").unwrap(), 4);
    assert_eq!(check_source("").unwrap(), 0);
}

#[test]
fn pipeline_listing_is_numbered() {
    assert_eq!(
        pipeline_listing("env.name, print(1)").unwrap(),
        "1  lookup env\n2  member .name\n3  commit\n4  lookup print\n5  call (2 steps)\n6  commit\n"
    );
}
