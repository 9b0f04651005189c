//! Loop balance check run ahead of emission.

use crate::{Command, Scanner, StructureError, StructureErrorKind};

/// Verifies that every `[` ahead of the scanner's cursor has a matching `]`.
///
/// The scanner is not advanced. On success returns the deepest nesting level
/// reached. An unmatched `]` is reported at its own position; if loops are
/// still open at the end, the innermost unclosed `[` is reported.
///
/// # Errors
///
/// Returns a [`StructureError`] locating the first bracket that cannot be
/// paired.
pub fn check(scanner: &Scanner) -> Result<usize, StructureError> {
    let mut open = Vec::new();
    let mut max_depth = 0;

    for (offset, command) in scanner.remaining() {
        match command {
            Command::LoopOpen => {
                open.push(offset);
                max_depth = max_depth.max(open.len());
            }
            Command::LoopClose => {
                if open.pop().is_none() {
                    return Err(locate(scanner, offset, StructureErrorKind::UnmatchedLoopClose));
                }
            }
            _ => {}
        }
    }

    match open.last() {
        Some(&offset) => Err(locate(scanner, offset, StructureErrorKind::UnclosedLoopOpen)),
        None => Ok(max_depth),
    }
}

fn locate(scanner: &Scanner, offset: usize, kind: StructureErrorKind) -> StructureError {
    let pos = scanner.position(offset);
    StructureError {
        kind,
        line: pos.line,
        column: pos.column,
    }
}
