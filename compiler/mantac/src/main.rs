//! Manta CLI
//!
//! Compile and run Manta programs against the built-in prelude.

use mantac::commands::{check_file, eval_inline, explain_error, print_pipeline, run_file};
use mantac::RunOptions;

fn main() {
    mantac::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" | "eval" | "check" | "pipeline" => {
            let options = match RunOptions::parse(&args[2..]) {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            };
            let Some(input) = options.input.clone() else {
                let what = if command == "eval" { "<source>" } else { "<file.manta>" };
                eprintln!("error: missing {what}");
                eprintln!("Usage: manta {command} {what} [options]");
                std::process::exit(1);
            };
            match command.as_str() {
                "run" => run_file(&input, &options),
                "eval" => eval_inline(&input, &options),
                "check" => check_file(&input, options.color),
                _ => print_pipeline(&input, options.color),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Manta {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: manta explain <ERROR_CODE>");
                eprintln!("Example: manta explain E0005");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        _ => {
            // If it looks like a script, run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("manta"))
            {
                match RunOptions::parse(&args[2..]) {
                    Ok(options) => run_file(command, &options),
                    Err(msg) => {
                        eprintln!("error: {msg}");
                        std::process::exit(1);
                    }
                }
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Manta expression language");
    println!();
    println!("Usage: manta <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.manta>       Compile and evaluate a program");
    println!("  eval <source>          Compile and evaluate source text");
    println!("  check <file.manta>     Compile only, reporting errors");
    println!("  pipeline <file.manta>  List the steps a program compiles to");
    println!("  explain <code>         Explain an error code (e.g., E0005)");
    println!("  help                   Show this help message");
    println!("  version                Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>         Diagnostic colors: auto (default), always, never");
    println!("  --receiver=<name>      Run against a prelude entry instead of the prelude");
    println!("  -- <args>...           Program arguments, read with `args()`");
    println!();
    println!("Prelude:");
    println!("  print(...)  concat(...)  identity(...)  count(...)  args()  env.name  env.version");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=manta_eval=trace manta eval '1, 2'");
    println!();
    println!("Examples:");
    println!("  manta eval 'print(\"hello\", env.name)'");
    println!("  manta eval 'count(args())' -- a b c");
    println!("  manta run script.manta");
}
