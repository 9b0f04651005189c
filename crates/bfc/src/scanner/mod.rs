//! Scanner: owns one program's text and hands out commands one at a time.
//!
//! What it does
//! - Walks the buffer byte by byte, skipping anything that is not one of the
//!   eight command symbols. Skipped bytes are comments, not errors.
//! - Returns [`Command::EndOfInput`] once the cursor reaches the end, and keeps
//!   returning it without moving.
//! - Offers a read-only view of the commands still ahead of the cursor
//!   ([`Scanner::remaining`]) so a caller can inspect the program before
//!   consuming it.
//!
//! Invariants
//! - The buffer never changes after construction.
//! - `cursor <= buffer.len()`, and the cursor only moves forward.
//! - The buffer holds no NUL byte: construction cuts the text at the first
//!   NUL, which ends a program just as the slice end does.
//!
//! Example
//! ```
//! use bfc::{Command, Scanner};
//!
//! let mut scanner = Scanner::new("add one: + then print: .");
//! assert_eq!(scanner.next_command(), Command::Increment);
//! assert_eq!(scanner.next_command(), Command::Output);
//! assert_eq!(scanner.next_command(), Command::EndOfInput);
//! assert_eq!(scanner.next_command(), Command::EndOfInput);
//! ```

use core::iter::FusedIterator;

use bstr::ByteSlice;

use crate::{Command, Source};

/// A 1-based line and character column inside a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column in characters, starting at 1.
    pub column: usize,
}

/// Pull-based command scanner over an owned program buffer.
#[derive(Debug, Clone)]
pub struct Scanner {
    source: Box<[u8]>,
    cursor: usize,
}

impl Scanner {
    /// Takes ownership of the program text.
    ///
    /// Everything from the first NUL byte onward is discarded.
    pub fn new(text: impl Into<Vec<u8>>) -> Self {
        let mut text = text.into();
        if let Some(nul) = text.find_byte(0) {
            text.truncate(nul);
        }
        Self {
            source: text.into_boxed_slice(),
            cursor: 0,
        }
    }

    /// Builds a scanner over a loaded [`Source`].
    #[must_use]
    pub fn from_source(source: Source) -> Self {
        Self::new(source.into_bytes())
    }

    /// Returns the next command and advances past it.
    ///
    /// At the end of the buffer this returns [`Command::EndOfInput`] on every
    /// call without advancing.
    pub fn next_command(&mut self) -> Command {
        while let Some(&byte) = self.source.get(self.cursor) {
            self.cursor += 1;
            if let Some(command) = Command::from_byte(byte) {
                return command;
            }
        }
        Command::EndOfInput
    }

    /// Commands after the cursor, paired with their byte offsets. The scanner
    /// itself does not move.
    #[must_use]
    pub fn remaining(&self) -> Commands<'_> {
        Commands {
            bytes: &self.source,
            offset: self.cursor,
        }
    }

    /// Byte offset of the next unread byte.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The full program text, comments included.
    #[must_use]
    pub fn source(&self) -> &[u8] {
        &self.source
    }

    /// Converts a byte offset into a line and column.
    ///
    /// Columns count characters, decoding the line as UTF-8 and treating each
    /// invalid sequence as one character. Offsets past the end are clamped.
    #[must_use]
    pub fn position(&self, offset: usize) -> Position {
        let before = &self.source[..offset.min(self.source.len())];
        let line_start = before.rfind_byte(b'\n').map_or(0, |nl| nl + 1);
        Position {
            line: before.find_iter(b"\n").count() + 1,
            column: before[line_start..].chars().count() + 1,
        }
    }

    /// Returns `true` once every command has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining().next().is_none()
    }
}

impl Iterator for Scanner {
    type Item = Command;

    fn next(&mut self) -> Option<Command> {
        match self.next_command() {
            Command::EndOfInput => None,
            command => Some(command),
        }
    }
}

impl FusedIterator for Scanner {}

/// Borrowed iterator over the commands ahead of a [`Scanner`]'s cursor.
///
/// Yields `(offset, command)` pairs and never yields
/// [`Command::EndOfInput`].
#[derive(Debug, Clone)]
pub struct Commands<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl Iterator for Commands<'_> {
    type Item = (usize, Command);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&byte) = self.bytes.get(self.offset) {
            let at = self.offset;
            self.offset += 1;
            if let Some(command) = Command::from_byte(byte) {
                return Some((at, command));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.bytes.len().saturating_sub(self.offset)))
    }
}

impl FusedIterator for Commands<'_> {}
