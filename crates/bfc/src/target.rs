//! The C text the translator emits.
//!
//! Cells are `unsigned char`, so `++` and `--` wrap modulo 256. The data
//! pointer is a plain `int` index into a static array declared in `main`.

use std::io::{self, Write};

use crate::{Command, EofBehavior, Indent, TranslatorOptions};

/// Writes the program header, up to and including the tape and pointer
/// declarations.
pub(crate) fn write_preamble<W: Write + ?Sized>(
    sink: &mut W,
    options: &TranslatorOptions,
) -> io::Result<()> {
    sink.write_all(b"#include <stdio.h>\nint\nmain(void)\n{\n")?;
    write_line(
        sink,
        options.indent,
        0,
        format_args!("static unsigned char buffer[{}];", options.tape_size),
    )?;
    write_line(sink, options.indent, 0, format_args!("int p = 0;"))
}

/// Writes the statement for one command at nesting `depth`.
///
/// [`Command::EndOfInput`] writes nothing.
pub(crate) fn write_statement<W: Write + ?Sized>(
    sink: &mut W,
    options: &TranslatorOptions,
    depth: usize,
    command: Command,
) -> io::Result<()> {
    let Some(text) = statement(command, options.eof) else {
        return Ok(());
    };
    write_line(sink, options.indent, depth, format_args!("{text}"))
}

/// Closes `main`.
pub(crate) fn write_epilogue<W: Write + ?Sized>(
    sink: &mut W,
    options: &TranslatorOptions,
) -> io::Result<()> {
    write_line(sink, options.indent, 0, format_args!("return 0;"))?;
    sink.write_all(b"}\n")
}

/// The C statement for `command`.
pub(crate) fn statement(command: Command, eof: EofBehavior) -> Option<&'static str> {
    Some(match command {
        Command::MoveRight => "p++;",
        Command::MoveLeft => "p--;",
        Command::Increment => "buffer[p]++;",
        Command::Decrement => "buffer[p]--;",
        Command::Output => "putchar(buffer[p]);",
        Command::Input => match eof {
            EofBehavior::Unchanged => {
                "{ int c = getchar(); if (c != EOF) buffer[p] = (unsigned char)c; }"
            }
            EofBehavior::Zero => "{ int c = getchar(); buffer[p] = c == EOF ? 0 : (unsigned char)c; }",
            EofBehavior::Max => "buffer[p] = (unsigned char)getchar();",
        },
        Command::LoopOpen => "while (buffer[p]) {",
        Command::LoopClose => "}",
        Command::EndOfInput => return None,
    })
}

// Statements inside `main` sit one level in, so `depth` 0 is already indented.
fn write_line<W: Write + ?Sized>(
    sink: &mut W,
    indent: Indent,
    depth: usize,
    text: core::fmt::Arguments<'_>,
) -> io::Result<()> {
    let levels = depth + 1;
    match indent {
        Indent::Tabs => {
            for _ in 0..levels {
                sink.write_all(b"\t")?;
            }
        }
        Indent::Spaces(width) => {
            write!(sink, "{:1$}", "", levels * usize::from(width.get()))?;
        }
    }
    sink.write_fmt(text)?;
    sink.write_all(b"\n")
}
