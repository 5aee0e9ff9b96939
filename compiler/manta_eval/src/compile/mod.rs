//! Single-pass scanner/compiler.
//!
//! The scanner walks the source once, left to right, and emits pipeline
//! steps as it recognizes tokens. There is no token stream and no syntax
//! tree: the only state is whether the next token starts a value or operates
//! on one.
//!
//! ```text
//! program  := slot (',' slot)*
//! slot     := (';' reset)* primary trailer*
//! primary  := 'this' | IDENT | STRING | NUMBER | '(' program ')' | '{' program '}'
//! trailer  := '(' program ')' | '.' IDENT
//! ```
//!
//! Nested `(...)` and `{...}` bodies are extracted by a balanced scan and
//! compiled recursively into their own pipelines, so recursion depth equals
//! source nesting depth.

mod error;
mod literal;

use manta_lexer_core::{is_horizontal_space, is_ident_continue, is_ident_start, is_line_break};
use manta_lexer_core::{Cursor, SourceBuffer};
use manta_value::Value;

use crate::{Closure, Pipeline, PipelineBuilder, Program};

pub use error::{CompileError, CompileErrorKind};
use literal::Number;

/// Compile `source` into a reusable [`Program`].
///
/// Nothing is evaluated: name lookups, calls and capability checks all
/// happen when the program runs.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn compile(source: &str) -> Result<Program, CompileError> {
    let pipeline = compile_pipeline(source, 1)?;
    tracing::debug!(steps = pipeline.len(), "compiled");
    Ok(Program::new(pipeline))
}

/// Compile `source` whose first byte sits on `first_line`.
fn compile_pipeline(source: &str, first_line: u32) -> Result<Pipeline, CompileError> {
    manta_stack::ensure_sufficient_stack(|| {
        let buffer = SourceBuffer::new(source);
        Scanner::new(buffer.cursor_at_line(first_line)).run()
    })
}

/// What the next token must be.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ScanState {
    /// Start of a value: `this`, a name, a literal, a group or a block.
    AtPrimary,
    /// An operator on the current value: a call or a member access.
    AtTrailer,
}

struct Scanner<'a> {
    cursor: Cursor<'a>,
    state: ScanState,
    /// Whether the current slot has seen any token, `;` included.
    slot_touched: bool,
    builder: PipelineBuilder,
}

impl<'a> Scanner<'a> {
    fn new(cursor: Cursor<'a>) -> Self {
        Scanner {
            cursor,
            state: ScanState::AtPrimary,
            slot_touched: false,
            builder: PipelineBuilder::new(),
        }
    }

    fn run(mut self) -> Result<Pipeline, CompileError> {
        loop {
            self.cursor.eat_trivia();
            if self.cursor.is_eof() {
                break;
            }
            match self.cursor.current() {
                b',' => {
                    self.cursor.advance();
                    self.end_slot();
                }
                b';' => {
                    self.cursor.advance();
                    self.builder.reset();
                    self.state = ScanState::AtPrimary;
                    self.slot_touched = true;
                }
                _ => match self.state {
                    ScanState::AtPrimary => {
                        self.primary()?;
                        self.state = ScanState::AtTrailer;
                        self.slot_touched = true;
                    }
                    ScanState::AtTrailer => self.trailer()?,
                },
            }
        }

        // A completely empty trailing slot contributes nothing.
        if self.slot_touched || self.state == ScanState::AtTrailer {
            self.end_slot();
        }
        Ok(self.builder.build())
    }

    /// Commit the slot, substituting `nothing` when it has no value.
    fn end_slot(&mut self) {
        if self.state == ScanState::AtPrimary {
            self.builder.replace("nothing", Value::Nothing);
        }
        self.builder.commit();
        self.state = ScanState::AtPrimary;
        self.slot_touched = false;
    }

    fn primary(&mut self) -> Result<(), CompileError> {
        match self.cursor.current() {
            b'(' => self.group(),
            b'{' => self.block(),
            b'"' => {
                let raw = literal::scan_string(&mut self.cursor)?;
                let text = literal::unescape(raw);
                self.builder
                    .replace(format!("str {text:?}"), Value::string(&*text));
                Ok(())
            }
            b'0'..=b'9' => {
                match literal::scan_number(&mut self.cursor)? {
                    Number::Int(n) => self.builder.replace(format!("int {n}"), Value::int(n)),
                    Number::Float(n) => {
                        self.builder.replace(format!("float {n:?}"), Value::float(n))
                    }
                };
                Ok(())
            }
            _ => {
                let c = self.cursor.current_char();
                if !is_ident_start(c) {
                    return Err(CompileError::invalid_character(
                        self.cursor.line(),
                        c,
                        "a value",
                    ));
                }
                let name = self.identifier()?;
                if name != "this" {
                    let label = format!("lookup {name}");
                    let name = name.to_owned();
                    self.builder
                        .map(label, move |ctx, _| ctx.receiver().lookup(&name));
                }
                Ok(())
            }
        }
    }

    fn trailer(&mut self) -> Result<(), CompileError> {
        match self.cursor.current() {
            b'(' => self.call(),
            b'.' => {
                self.cursor.advance();
                self.member()
            }
            _ => Err(CompileError::invalid_character(
                self.cursor.line(),
                self.cursor.current_char(),
                "`(`, `.`, `,` or `;`",
            )),
        }
    }

    /// Read an identifier starting at the current character.
    ///
    /// An identifier ends at trivia, `;`, `.`, `,` or `(`, none of which is
    /// consumed.
    fn identifier(&mut self) -> Result<&'a str, CompileError> {
        let start = self.cursor.pos();
        self.cursor.advance_char();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance_char();
        }
        let b = self.cursor.current();
        let ends = self.cursor.is_eof()
            || is_horizontal_space(b)
            || is_line_break(b)
            || matches!(b, b';' | b'.' | b',' | b'(');
        if !ends {
            return Err(CompileError::invalid_character(
                self.cursor.line(),
                self.cursor.current_char(),
                "identifier character",
            ));
        }
        Ok(self.cursor.slice(start, self.cursor.pos()))
    }

    /// `.name` with the cursor past the `.`.
    fn member(&mut self) -> Result<(), CompileError> {
        self.cursor.eat_trivia();
        let c = self.cursor.current_char();
        if self.cursor.is_eof() || !is_ident_start(c) {
            let found = (!self.cursor.is_eof()).then_some(c);
            return Err(CompileError::expected_identifier(self.cursor.line(), found));
        }
        let name = self.identifier()?;
        let label = format!("member .{name}");
        let name = name.to_owned();
        self.builder
            .map(label, move |_, current| current.lookup(&name));
        Ok(())
    }

    /// Extract the body of the span opening at the current byte, returning
    /// it with the line it starts on.
    fn nested(&mut self, open: u8, close: u8) -> Result<(&'a str, u32), CompileError> {
        let line = self.cursor.line();
        let span = self
            .cursor
            .eat_balanced(open, close)
            .ok_or_else(|| CompileError::unbalanced(line, open))?;
        Ok((self.cursor.slice(span.start, span.end), line))
    }

    /// `( body )` as a primary: splice the body's results.
    fn group(&mut self) -> Result<(), CompileError> {
        let (body, line) = self.nested(b'(', b')')?;
        if body.trim().is_empty() {
            self.builder.replace("group ()", Value::Nothing);
            return Ok(());
        }
        let inner = compile_pipeline(body, line)?;
        tracing::trace!(line, steps = inner.len(), "compiled group");
        self.builder
            .splice(format!("group ({} steps)", inner.len()), move |ctx, _| {
                let mut sub = ctx.derive();
                inner.run(&mut sub)?;
                Ok(sub.into_results())
            });
        Ok(())
    }

    /// `{ body }`: a closure over the receiver live when the block runs.
    fn block(&mut self) -> Result<(), CompileError> {
        let (body, line) = self.nested(b'{', b'}')?;
        let inner = if body.trim().is_empty() {
            let mut empty = PipelineBuilder::new();
            empty.replace("nothing", Value::Nothing).commit();
            empty.build()
        } else {
            compile_pipeline(body, line)?
        };
        tracing::trace!(line, steps = inner.len(), "compiled block");
        self.builder
            .map(format!("closure ({} steps)", inner.len()), move |ctx, _| {
                Ok(Closure::new(inner.clone(), ctx.receiver().clone()).into_value())
            });
        Ok(())
    }

    /// `( args )` as a trailer: invoke the current value.
    fn call(&mut self) -> Result<(), CompileError> {
        let (body, line) = self.nested(b'(', b')')?;
        if body.trim().is_empty() {
            self.builder
                .splice("call ()", |_, current| current.as_callable()?.invoke(&[]));
            return Ok(());
        }
        let args = compile_pipeline(body, line)?;
        tracing::trace!(line, steps = args.len(), "compiled call arguments");
        self.builder
            .splice(format!("call ({} steps)", args.len()), move |ctx, current| {
                let callable = current.as_callable()?;
                let mut sub = ctx.derive();
                args.run(&mut sub)?;
                callable.invoke(&sub.into_results())
            });
        Ok(())
    }
}
