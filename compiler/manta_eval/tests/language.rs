//! End-to-end behavior of compiled programs against small host objects.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use manta_eval::{compile, CompileError, CompileErrorKind, Namespace, NativeFn, Value};
use manta_value::host_error;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn eval(source: &str, receiver: Value) -> Vec<Value> {
    compile(source).unwrap().evaluate(receiver, &[]).unwrap()
}

/// Echoes its arguments back.
fn echo() -> Value {
    Value::callable(NativeFn::new("echo", |args| Ok(args.to_vec())))
}

fn root() -> Value {
    let player = Namespace::new("player")
        .with("name", Value::string("ada"))
        .with("level", Value::int(7));
    let sum = NativeFn::new("sum", |args| {
        let mut total = 0;
        for arg in args {
            total += arg
                .as_int()
                .ok_or_else(|| host_error(format!("sum: {} is not an int", arg.type_name())))?;
        }
        Ok(vec![Value::int(total)])
    });
    Value::container(
        Namespace::new("root")
            .with("player", Value::container(player))
            .with("echo", echo())
            .with("sum", Value::callable(sum))
            .with("none", Value::callable(NativeFn::new("none", |_| Ok(vec![])))),
    )
}

#[test]
fn string_literal_round_trip() {
    for receiver in [Value::Nothing, Value::int(3), root()] {
        assert_eq!(eval("\"abc\"", receiver), vec![Value::string("abc")]);
    }
}

#[test]
fn integer_slots() {
    assert_eq!(
        eval("1,2,3", Value::Nothing),
        vec![Value::int(1), Value::int(2), Value::int(3)]
    );
}

#[test]
fn empty_program_has_no_results() {
    assert_eq!(eval("", root()), vec![]);
}

#[test]
fn this_is_the_receiver() {
    let receiver = root();
    assert_eq!(eval("this", receiver.clone()), vec![receiver]);
    assert_eq!(eval("this", Value::int(5)), vec![Value::int(5)]);
}

#[test]
fn empty_slots_yield_nothing() {
    assert_eq!(eval(",1", Value::Nothing), vec![Value::Nothing, Value::int(1)]);
    assert_eq!(eval("1,", Value::Nothing), vec![Value::int(1)]);
    assert_eq!(eval("1,,2", Value::Nothing), vec![
        Value::int(1),
        Value::Nothing,
        Value::int(2),
    ]);
}

#[test]
fn missing_name_fails_at_evaluate_time() {
    let program = compile("foo").unwrap();
    let err = program.evaluate(root(), &[]).unwrap_err();
    assert!(err.is_name_error());
    assert_eq!(err.message, "undefined name: foo");
}

#[test]
fn unbalanced_paren_is_a_compile_error() {
    let err = compile("1,\n  foo(").unwrap_err();
    assert_eq!(
        err,
        CompileError {
            line: 2,
            kind: CompileErrorKind::UnbalancedDelimiter { open: '(' },
        }
    );
    assert_eq!(err.to_string(), "unbalanced `(` at line 2");
}

#[test]
fn navigation_and_calls() {
    assert_eq!(
        eval("player.name, player.level, sum(1, 2, player.level)", root()),
        vec![Value::string("ada"), Value::int(7), Value::int(10)]
    );
}

#[test]
fn identifiers_look_up_on_receiver_not_focus() {
    // `name` after `;` resolves on the root even though focus was `player`.
    let err = compile("player; name").unwrap().evaluate(root(), &[]).unwrap_err();
    assert!(err.is_name_error());
}

#[test]
fn semicolon_runs_for_effect_and_keeps_last() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = {
        let calls = Arc::clone(&calls);
        NativeFn::new("tick", move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        })
    };
    let host = Value::container(Namespace::new("host").with("tick", Value::callable(counter)));
    let results = eval("tick(); tick(); 42", host);
    assert_eq!(results, vec![Value::int(42)]);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn groups_and_calls_splice_results() {
    assert_eq!(
        eval("(1, 2), 3", Value::Nothing),
        vec![Value::int(1), Value::int(2), Value::int(3)]
    );
    assert_eq!(
        eval("echo(1, \"x\")", root()),
        vec![Value::int(1), Value::string("x")]
    );
    assert_eq!(eval("none(), 1", root()), vec![Value::int(1)]);
    assert_eq!(eval("()", Value::Nothing), vec![Value::Nothing]);
}

#[test]
fn group_runs_against_the_same_receiver() {
    assert_eq!(eval("(player).name", root()), vec![Value::string("ada")]);
}

#[test]
fn closures_capture_definition_receiver() {
    let closure = eval("{this}", Value::int(1)).remove(0);
    assert_eq!(closure.call0().unwrap(), vec![Value::int(1)]);
    assert_eq!(closure.call1(Value::int(2)).unwrap(), vec![Value::int(2)]);
}

#[test]
fn closure_called_in_script() {
    assert_eq!(eval("{this}()", Value::int(9)), vec![Value::int(9)]);
    assert_eq!(eval("{this}(4)", Value::int(9)), vec![Value::int(4)]);
    assert_eq!(
        eval("{player.name}()", root()),
        vec![Value::string("ada")]
    );
    assert_eq!(eval("{}(1)", Value::Nothing), vec![Value::Nothing]);
}

#[test]
fn closure_passed_to_host() {
    let apply = NativeFn::new("apply", |args| match args {
        [f, rest @ ..] => f.call(rest),
        [] => Err(host_error("apply: missing function")),
    });
    let host = Value::container(Namespace::new("host").with("apply", Value::callable(apply)));
    assert_eq!(eval("apply({this}, 5)", host), vec![Value::int(5)]);
}

#[test]
fn member_on_integer_is_capability_error() {
    let program = compile("1.foo").unwrap();
    let err = program.evaluate(root(), &[]).unwrap_err();
    assert!(err.is_capability_error());
    assert_eq!(err.message, "int is not a container");
}

#[test]
fn calling_a_literal_is_capability_error() {
    let err = compile("player.name()").unwrap().evaluate(root(), &[]).unwrap_err();
    assert!(err.is_capability_error());
    assert_eq!(err.message, "str is not a callable");
}

#[test]
fn capability_is_checked_before_arguments_run() {
    let err = compile("player(missing)").unwrap().evaluate(root(), &[]).unwrap_err();
    assert!(err.is_capability_error());
}

#[test]
fn host_errors_propagate_with_step_note() {
    let err = compile("sum(\"x\")").unwrap().evaluate(root(), &[]).unwrap_err();
    assert_eq!(err.message, "sum: str is not an int");
    assert_eq!(err.notes, vec!["while running `call (2 steps)`"]);
}

#[test]
fn first_argument_rebinds_program_receiver() {
    let program = compile("this").unwrap();
    assert_eq!(
        program.evaluate(Value::int(1), &[Value::int(2), Value::int(3)]).unwrap(),
        vec![Value::int(2)]
    );
}

#[test]
fn program_as_closure() {
    let closure = compile("this.level").unwrap().into_closure(Value::Nothing);
    let player = compile("player").unwrap().run(root()).unwrap().remove(0);
    assert_eq!(closure.call1(player).unwrap(), vec![Value::int(7)]);
    assert!(closure.call0().unwrap_err().is_capability_error());
}

#[test]
fn float_open_question_is_compile_error() {
    let err = compile("1.5.3").unwrap_err();
    assert_eq!(err.kind, CompileErrorKind::ExpectedIdentifier { found: Some('3') });
}

#[test]
fn deep_closure_recursion_is_stack_safe() {
    let depth = 1_000;
    let source = format!("{}this{}", "{".repeat(depth), "}()".repeat(depth));
    assert_eq!(eval(&source, Value::int(1)), vec![Value::int(1)]);
}

proptest! {
    #[test]
    fn integer_literals_evaluate_to_themselves(n in 0i64..=i64::MAX) {
        prop_assert_eq!(eval(&n.to_string(), Value::Nothing), vec![Value::int(n)]);
    }

    #[test]
    fn evaluation_is_deterministic(slots in prop::collection::vec(0i64..1000, 0..8)) {
        let source = slots
            .iter()
            .map(|n| format!("sum({n}, player.level)"))
            .collect::<Vec<_>>()
            .join(", ");
        let program = compile(&source).unwrap();
        let first = program.evaluate(root(), &[]).unwrap();
        let second = program.evaluate(root(), &[]).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, slots.iter().map(|n| Value::int(n + 7)).collect::<Vec<_>>());
    }
}
