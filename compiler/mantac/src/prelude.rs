//! The host the CLI runs scripts against.
//!
//! A small container of general-purpose callables. Hosts embedding the
//! language register their own; this one exists so the `manta` binary has
//! something to navigate.

use std::io::Write;

use manta_value::{host_error, Namespace, NativeFn, Value};

/// Text form of a value for output: strings raw, everything else as
/// displayed.
pub fn render(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_owned(),
        None => value.to_string(),
    }
}

fn joined(args: &[Value], separator: &str) -> String {
    args.iter().map(render).collect::<Vec<_>>().join(separator)
}

/// Build the prelude container.
///
/// `args` are the program arguments, exposed through the `args` callable.
pub fn prelude(args: &[String]) -> Value {
    let program_args: Vec<Value> = args.iter().map(Value::string).collect();

    let print = NativeFn::new("print", |args| {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", joined(args, " "))
            .map_err(|e| host_error(format!("print: {e}")))?;
        Ok(vec![Value::Nothing])
    });
    let concat = NativeFn::new("concat", |args| Ok(vec![Value::string(joined(args, ""))]));
    let identity = NativeFn::new("identity", |args| Ok(args.to_vec()));
    let count = NativeFn::new("count", |args| {
        let n = i64::try_from(args.len()).map_err(|_| host_error("count: too many arguments"))?;
        Ok(vec![Value::int(n)])
    });
    let args_fn = NativeFn::new("args", move |_| Ok(program_args.clone()));
    let env = Namespace::new("env")
        .with("name", Value::string("manta"))
        .with("version", Value::string(env!("CARGO_PKG_VERSION")));

    Value::container(
        Namespace::new("prelude")
            .with("print", Value::callable(print))
            .with("concat", Value::callable(concat))
            .with("identity", Value::callable(identity))
            .with("count", Value::callable(count))
            .with("args", Value::callable(args_fn))
            .with("env", Value::container(env)),
    )
}
