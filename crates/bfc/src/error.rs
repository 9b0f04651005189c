use std::{io, path::PathBuf};

use thiserror::Error;

/// Everything that can stop a translation job.
#[derive(Debug, Error)]
pub enum Error {
    /// The source file could not be opened or read.
    #[error("failed to read source '{}'", path.display())]
    Source {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The output destination could not be created or finalized.
    #[error("failed to open output '{}'", path.display())]
    Sink {
        /// The destination that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// Writing generated code to the sink failed.
    #[error("failed to write generated code")]
    Emit(#[source] io::Error),
    /// The program's loops are not balanced.
    #[error("malformed program")]
    Structure(#[from] StructureError),
}

/// An unbalanced loop, with the 1-based position of the offending bracket.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct StructureError {
    /// What is wrong with the bracket.
    pub kind: StructureErrorKind,
    /// Line of the bracket, starting at 1.
    pub line: usize,
    /// Column of the bracket in characters, starting at 1.
    pub column: usize,
}

/// The two ways loop brackets can fail to pair up.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureErrorKind {
    /// A `]` with no open loop to close.
    #[error("unmatched ']'")]
    UnmatchedLoopClose,
    /// A `[` still open at end of input.
    #[error("unclosed '['")]
    UnclosedLoopOpen,
}
