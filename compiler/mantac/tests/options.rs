//! Command-line option parsing.

use manta_diagnostic::emitter::ColorMode;
use mantac::RunOptions;
use pretty_assertions::assert_eq;

fn parse(args: &[&str]) -> Result<RunOptions, String> {
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    RunOptions::parse(&args)
}

#[test]
fn defaults() {
    assert_eq!(parse(&[]), Ok(RunOptions::default()));
    assert_eq!(RunOptions::default().color, ColorMode::Auto);
}

#[test]
fn input_and_flags_in_any_order() {
    let expected = RunOptions {
        input: Some("main.manta".to_string()),
        color: ColorMode::Never,
        receiver: Some("env".to_string()),
        args: Vec::new(),
    };
    assert_eq!(
        parse(&["--color=never", "main.manta", "--receiver=env"]),
        Ok(expected.clone())
    );
    assert_eq!(
        parse(&["main.manta", "--receiver=env", "--color=never"]),
        Ok(expected)
    );
}

#[test]
fn everything_after_double_dash_is_a_program_argument() {
    let options = parse(&["s.manta", "--", "a", "--color=always", "b"]);
    assert_eq!(
        options,
        Ok(RunOptions {
            input: Some("s.manta".to_string()),
            args: vec!["a".to_string(), "--color=always".to_string(), "b".to_string()],
            ..RunOptions::default()
        })
    );
}

#[test]
fn color_modes() {
    for (flag, mode) in [
        ("--color=auto", ColorMode::Auto),
        ("--color=always", ColorMode::Always),
        ("--color=never", ColorMode::Never),
    ] {
        assert_eq!(parse(&[flag]).map(|o| o.color), Ok(mode));
    }
    assert_eq!(
        parse(&["--color=sometimes"]),
        Err("invalid color mode 'sometimes' (expected auto, always or never)".to_string())
    );
}

#[test]
fn rejects_unknown_and_extra_arguments() {
    assert_eq!(parse(&["--verbose"]), Err("unknown option '--verbose'".to_string()));
    assert_eq!(
        parse(&["a.manta", "b.manta"]),
        Err("unexpected argument 'b.manta'".to_string())
    );
    assert!(parse(&["--receiver="]).is_err());
}
