//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! With source attached, located diagnostics render the offending line:
//!
//! ```text
//! error[E0005]: unbalanced `(`
//!   --> script.manta:2
//!    |
//!  2 |   foo(
//!    |   ^^^^ opened here
//!    |
//! ```

use std::io::{self, Write};

use crate::Diagnostic;

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Split `source` at `\n`, `\r\n` and lone `\r`, the terminators the
/// scanner counts lines by.
fn split_lines(source: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(source);
    std::iter::from_fn(move || {
        let text = rest?;
        match text.find(['\n', '\r']) {
            Some(end) => {
                let skip = if text[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&text[end + skip..]);
                Some(&text[..end])
            }
            None => {
                rest = None;
                Some(text)
            }
        }
    })
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be used.
    /// This parameter is ignored for `Always` and `Never` modes.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<String>,
    file_path: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is only consulted for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
        }
    }

    /// Attach the source text so located diagnostics show a snippet.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Name shown in the `-->` location header.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        self.write_colored(&format!("[{code}]"), colors::BOLD);
    }

    /// `= note: text` / `= help: text` trailer lines.
    fn write_trailer(&mut self, indent: &str, kind: &str, color: &str, text: &str) {
        let _ = write!(self.writer, "{indent}= ");
        self.write_colored(kind, color);
        let _ = writeln!(self.writer, ": {text}");
    }

    /// The source text of 1-based `line`, if source is attached and long
    /// enough.
    fn source_line(&self, line: u32) -> Option<String> {
        let index = usize::try_from(line).ok()?.checked_sub(1)?;
        split_lines(self.source.as_deref()?)
            .nth(index)
            .map(str::to_owned)
    }

    fn write_location(&mut self, diagnostic: &Diagnostic, line: u32) -> String {
        let path = self.file_path.as_deref().unwrap_or("<input>");
        let header = format!("{path}:{line}");
        let gutter = " ".repeat(line.to_string().len());

        let Some(text) = self.source_line(line) else {
            let _ = write!(self.writer, "{gutter}--> {header}");
            if let Some(label) = &diagnostic.label {
                let _ = write!(self.writer, ": ");
                self.write_colored(label, colors::ERROR);
            }
            let _ = writeln!(self.writer);
            return gutter;
        };

        let _ = writeln!(self.writer, "{gutter}--> {header}");
        self.write_colored(&format!("{gutter} |"), colors::GUTTER);
        let _ = writeln!(self.writer);
        self.write_colored(&format!("{line} |"), colors::GUTTER);
        let _ = writeln!(self.writer, " {text}");

        // Underline the non-blank part of the line.
        let indent = text.chars().take_while(|c| c.is_whitespace()).count();
        let width = text.trim().chars().count().max(1);
        self.write_colored(&format!("{gutter} |"), colors::GUTTER);
        let _ = write!(self.writer, " {}", " ".repeat(indent));
        let mut marker = "^".repeat(width);
        if let Some(label) = &diagnostic.label {
            marker.push(' ');
            marker.push_str(label);
        }
        self.write_colored(&marker, colors::ERROR);
        let _ = writeln!(self.writer);
        self.write_colored(&format!("{gutter} |"), colors::GUTTER);
        let _ = writeln!(self.writer);
        gutter
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        let indent = match diagnostic.line {
            Some(line) => format!("{} ", self.write_location(diagnostic, line)),
            None => "  ".to_owned(),
        };

        for note in &diagnostic.notes {
            self.write_trailer(&indent, "note", colors::BOLD, note);
        }
        for suggestion in &diagnostic.suggestions {
            self.write_trailer(&indent, "help", colors::HELP, suggestion);
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        if error_count == 1 {
            let _ = writeln!(self.writer, ": aborting due to previous error");
        } else {
            let _ = writeln!(self.writer, ": aborting due to {error_count} previous errors");
        }
    }
}
