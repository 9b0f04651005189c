//! The Brainfuck command set.
//!
//! `Command` is the only vocabulary shared by the scanner and the translator.
//! Every byte of a program either maps to exactly one of the eight commands or
//! is a comment; [`Command::EndOfInput`] marks the end of the buffer and is
//! never emitted as code.

use core::fmt;

/// A classified Brainfuck command.
///
/// # Examples
///
/// ```
/// use bfc::Command;
///
/// assert_eq!(Command::from_byte(b'+'), Some(Command::Increment));
/// assert_eq!(Command::from_byte(b'x'), None);
/// assert_eq!(Command::LoopOpen.symbol(), Some('['));
/// assert!(Command::EndOfInput.is_eof());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `>`: advance the data pointer by one cell.
    MoveRight,
    /// `<`: retreat the data pointer by one cell.
    MoveLeft,
    /// `+`: increment the current cell, wrapping on overflow.
    Increment,
    /// `-`: decrement the current cell, wrapping on underflow.
    Decrement,
    /// `.`: write the current cell to standard output.
    Output,
    /// `,`: read one character from standard input into the current cell.
    Input,
    /// `[`: loop while the current cell is non-zero.
    LoopOpen,
    /// `]`: end of the innermost loop.
    LoopClose,
    /// No more commands in the buffer.
    EndOfInput,
}

impl Command {
    /// Every command that can appear in a program, in symbol order
    /// `> < + - . , [ ]`.
    pub const ALL: [Command; 8] = [
        Command::MoveRight,
        Command::MoveLeft,
        Command::Increment,
        Command::Decrement,
        Command::Output,
        Command::Input,
        Command::LoopOpen,
        Command::LoopClose,
    ];

    /// Classifies a single source byte. Anything outside the eight command
    /// symbols is a comment and yields `None`.
    #[must_use]
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'>' => Some(Self::MoveRight),
            b'<' => Some(Self::MoveLeft),
            b'+' => Some(Self::Increment),
            b'-' => Some(Self::Decrement),
            b'.' => Some(Self::Output),
            b',' => Some(Self::Input),
            b'[' => Some(Self::LoopOpen),
            b']' => Some(Self::LoopClose),
            _ => None,
        }
    }

    /// The source symbol for this command, or `None` for
    /// [`EndOfInput`](Self::EndOfInput).
    #[must_use]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Self::MoveRight => Some('>'),
            Self::MoveLeft => Some('<'),
            Self::Increment => Some('+'),
            Self::Decrement => Some('-'),
            Self::Output => Some('.'),
            Self::Input => Some(','),
            Self::LoopOpen => Some('['),
            Self::LoopClose => Some(']'),
            Self::EndOfInput => None,
        }
    }

    /// Returns `true` if the command is [`EndOfInput`].
    ///
    /// [`EndOfInput`]: Command::EndOfInput
    #[must_use]
    pub const fn is_eof(self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(ch) => write!(f, "'{ch}'"),
            None => f.write_str("end of input"),
        }
    }
}
