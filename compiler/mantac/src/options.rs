//! Command-line options shared by `run` and `eval`.

use manta_diagnostic::emitter::ColorMode;

/// Options for commands that evaluate a program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// The file path (`run`) or source text (`eval`).
    pub input: Option<String>,
    /// Diagnostic coloring.
    pub color: ColorMode,
    /// Prelude entry to use as the receiver instead of the prelude itself.
    pub receiver: Option<String>,
    /// Arguments after `--`, passed to the program as strings.
    pub args: Vec<String>,
}

impl RunOptions {
    /// Parse the arguments that follow the command name.
    ///
    /// Everything after a bare `--` is a program argument, even when it
    /// looks like an option.
    pub fn parse(args: &[String]) -> Result<RunOptions, String> {
        let mut options = RunOptions::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            if arg == "--" {
                options.args = iter.by_ref().cloned().collect();
                break;
            } else if let Some(mode) = arg.strip_prefix("--color=") {
                options.color = parse_color(mode)?;
            } else if let Some(name) = arg.strip_prefix("--receiver=") {
                if name.is_empty() {
                    return Err("`--receiver=` needs a prelude name".to_string());
                }
                options.receiver = Some(name.to_string());
            } else if arg.starts_with("--") {
                return Err(format!("unknown option '{arg}'"));
            } else if options.input.is_none() {
                options.input = Some(arg.clone());
            } else {
                return Err(format!("unexpected argument '{arg}'"));
            }
        }

        Ok(options)
    }
}

fn parse_color(mode: &str) -> Result<ColorMode, String> {
    match mode {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        other => Err(format!(
            "invalid color mode '{other}' (expected auto, always or never)"
        )),
    }
}
