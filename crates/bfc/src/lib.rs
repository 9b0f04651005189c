//! A Brainfuck to C source translator.
//!
//! The pipeline is a single linear pass:
//!
//! ```text
//! Source ──> Scanner ──> Translator ──> impl Write
//!            (pull one   (indent, balance
//!             command)    loop braces)
//! ```
//!
//! Bytes other than the eight command symbols are comments and are skipped.
//! Each remaining command becomes one C statement; loops become `while`
//! blocks keyed on the current cell.
//!
//! # Example
//!
//! ```rust
//! use bfc::{Indent, TranslatorOptions, translate_str};
//!
//! let options = TranslatorOptions {
//!     indent: Indent::spaces(4),
//!     ..Default::default()
//! };
//! let c = translate_str("print a zero byte: .", options)?;
//! assert!(c.contains("    putchar(buffer[p]);\n"));
//! # Ok::<(), bfc::Error>(())
//! ```

mod command;
mod error;
mod options;
mod scanner;
mod source;
pub mod structure;
mod target;
mod translator;
mod unit;


pub use command::Command;
pub use error::{Error, StructureError, StructureErrorKind};
pub use options::{BracketPolicy, DEFAULT_TAPE_SIZE, EofBehavior, Indent, TranslatorOptions};
pub use scanner::{Commands, Position, Scanner};
pub use source::{Source, SourceLocation};
pub use translator::{Summary, Translator, translate, translate_str};
pub use unit::TranslationUnit;
