//! Single-pass translation from scanned commands to C.
//!
//! The translator pulls one command at a time from a [`Scanner`] and writes
//! the matching statement straight to the sink. Nesting depth is the only
//! state it carries: `[` is written at the current depth and then deepens it,
//! `]` first returns to the enclosing depth and is written there.

use std::io::Write;

use crate::{
    BracketPolicy, Command, Error, Scanner, TranslatorOptions, structure, target,
};

/// Counters describing a finished translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of command statements written, loop braces included.
    pub commands: usize,
    /// Deepest loop nesting reached.
    pub max_depth: usize,
}

/// Drives a [`Scanner`] and writes the translated program.
#[derive(Debug)]
pub struct Translator<'s> {
    scanner: &'s mut Scanner,
    options: TranslatorOptions,
    depth: usize,
    summary: Summary,
}

impl<'s> Translator<'s> {
    /// Creates a translator at nesting depth zero.
    pub fn new(scanner: &'s mut Scanner, options: TranslatorOptions) -> Self {
        Self {
            scanner,
            options,
            depth: 0,
            summary: Summary::default(),
        }
    }

    /// Current loop nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Translates everything left in the scanner into `sink`: preamble, one
    /// statement per command, epilogue.
    ///
    /// With [`BracketPolicy::Checked`] the program is validated first, and
    /// nothing is written if its loops are unbalanced.
    ///
    /// # Errors
    ///
    /// - [`Error::Structure`] for unbalanced loops under
    ///   [`BracketPolicy::Checked`].
    /// - [`Error::Emit`] if the sink fails. Output written before the failure
    ///   stays in the sink.
    pub fn translate<W: Write + ?Sized>(&mut self, sink: &mut W) -> Result<Summary, Error> {
        if self.options.brackets == BracketPolicy::Checked {
            structure::check(self.scanner)?;
        }

        target::write_preamble(sink, &self.options).map_err(Error::Emit)?;
        loop {
            let command = self.scanner.next_command();
            if command.is_eof() {
                break;
            }
            self.emit(sink, command)?;
        }
        if self.depth > 0 {
            tracing::warn!(depth = self.depth, "loops still open at end of input");
        }
        target::write_epilogue(sink, &self.options).map_err(Error::Emit)?;
        sink.flush().map_err(Error::Emit)?;

        tracing::debug!(
            commands = self.summary.commands,
            max_depth = self.summary.max_depth,
            "translation finished"
        );
        Ok(self.summary)
    }

    fn emit<W: Write + ?Sized>(&mut self, sink: &mut W, command: Command) -> Result<(), Error> {
        if command == Command::LoopClose {
            if self.depth == 0 {
                tracing::warn!(
                    offset = self.scanner.cursor() - 1,
                    "unmatched ']' closed at the outermost level"
                );
            }
            self.depth = self.depth.saturating_sub(1);
            tracing::trace!(depth = self.depth, "loop close");
        }

        target::write_statement(sink, &self.options, self.depth, command).map_err(Error::Emit)?;
        self.summary.commands += 1;

        if command == Command::LoopOpen {
            self.depth += 1;
            self.summary.max_depth = self.summary.max_depth.max(self.depth);
            tracing::trace!(depth = self.depth, "loop open");
        }
        Ok(())
    }
}

/// Translates all commands left in `scanner` into `sink`.
///
/// # Errors
///
/// See [`Translator::translate`].
pub fn translate<W: Write + ?Sized>(
    scanner: &mut Scanner,
    sink: &mut W,
    options: TranslatorOptions,
) -> Result<Summary, Error> {
    Translator::new(scanner, options).translate(sink)
}

/// Translates program text held in memory and returns the generated C.
///
/// ```rust
/// use bfc::{TranslatorOptions, translate_str};
///
/// let c = translate_str("+[-]", TranslatorOptions::default()).unwrap();
/// assert!(c.contains("\twhile (buffer[p]) {\n\t\tbuffer[p]--;\n\t}\n"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Structure`] for unbalanced loops under
/// [`BracketPolicy::Checked`].
pub fn translate_str(text: &str, options: TranslatorOptions) -> Result<String, Error> {
    let mut scanner = Scanner::new(text);
    let mut out = Vec::with_capacity(output_capacity(&scanner));
    translate(&mut scanner, &mut out, options)?;
    // Every fragment written is ASCII.
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Bytes to reserve for the C generated from `scanner`: the fixed frame plus
/// a typical statement line per command. Comments cost nothing.
pub(crate) fn output_capacity(scanner: &Scanner) -> usize {
    const FRAME: usize = 128;
    const PER_COMMAND: usize = 16;
    FRAME + scanner.remaining().count() * PER_COMMAND
}
