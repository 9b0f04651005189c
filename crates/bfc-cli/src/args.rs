use std::{ffi::OsString, num::NonZeroUsize, path::PathBuf};

use bfc::EofBehavior;
use clap::{ArgAction, Parser, ValueEnum};

/// Translate Brainfuck programs into C.
#[derive(Debug, Parser)]
#[command(name = "bfc", version, about)]
pub struct Args {
    /// Program file, or the program text itself with `--from memory`.
    pub input: OsString,

    /// How to interpret INPUT.
    #[arg(long, value_enum, default_value_t = InputKind::Disk)]
    pub from: InputKind,

    /// Where to write the C program; `-` for stdout. Defaults to INPUT with a
    /// `.c` extension, or stdout for in-memory programs.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// TOML file with translator options. Flags given on the command line
    /// take precedence.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Indent with N spaces per level instead of tabs (0 selects tabs).
    #[arg(long, value_name = "N")]
    pub spaces: Option<u8>,

    /// Number of cells on the tape.
    #[arg(long, value_name = "CELLS")]
    pub tape_size: Option<NonZeroUsize>,

    /// What `,` stores once input is exhausted.
    #[arg(long, value_enum)]
    pub eof: Option<EofArg>,

    /// Translate programs with unbalanced brackets instead of rejecting them.
    #[arg(long)]
    pub permissive: bool,

    /// Log more; repeat for more detail. `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Where the output goes once defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Args {
    /// Resolves `--output` against the input kind.
    pub fn output(&self) -> Output {
        match (&self.output, self.from) {
            (Some(path), _) if path.as_os_str() == "-" => Output::Stdout,
            (Some(path), _) => Output::File(path.clone()),
            (None, InputKind::Disk) => Output::File(PathBuf::from(&self.input).with_extension("c")),
            (None, InputKind::Memory) => Output::Stdout,
        }
    }

    /// Default log directive from `-v`/`-q`.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputKind {
    /// Read INPUT as a file path.
    Disk,
    /// Use INPUT as the program text.
    Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EofArg {
    /// Leave the cell as it was.
    Unchanged,
    /// Store 0.
    Zero,
    /// Store 255.
    Max,
}

impl From<EofArg> for EofBehavior {
    fn from(arg: EofArg) -> Self {
        match arg {
            EofArg::Unchanged => EofBehavior::Unchanged,
            EofArg::Zero => EofBehavior::Zero,
            EofArg::Max => EofBehavior::Max,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("bfc").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn disk_input_defaults_to_sibling_c_file() {
        let args = parse(&["progs/hello.bf"]);
        assert_eq!(args.output(), Output::File(PathBuf::from("progs/hello.c")));
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn memory_input_defaults_to_stdout() {
        let args = parse(&["--from", "memory", "+."]);
        assert_eq!(args.from, InputKind::Memory);
        assert_eq!(args.output(), Output::Stdout);
    }

    #[test]
    fn dash_means_stdout() {
        assert_eq!(parse(&["a.bf", "-o", "-"]).output(), Output::Stdout);
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["a.bf", "-vv"]).log_level(), "debug");
        assert_eq!(parse(&["a.bf", "-q"]).log_level(), "error");
        assert!(Args::try_parse_from(["bfc", "a.bf", "-v", "-q"]).is_err());
    }

    #[test]
    fn zero_tape_is_rejected() {
        assert!(Args::try_parse_from(["bfc", "a.bf", "--tape-size", "0"]).is_err());
    }
}
