//! `bfc`: translate a Brainfuck program into C.

mod args;
mod config;

use std::{fs, io, path::Path, process::ExitCode};

use anyhow::{Result, bail};
use bfc::{Source, TranslationUnit};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::{Args, InputKind, Output};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let options = config::resolve(args)?;
    let output = args.output();

    let source = match args.from {
        InputKind::Disk => {
            let input = Path::new(&args.input);
            if let Output::File(path) = &output {
                if same_file(input, path) {
                    bail!("refusing to overwrite input '{}'", path.display());
                }
            }
            Source::from_path(input)?
        }
        InputKind::Memory => Source::from_memory(args.input.as_encoded_bytes()),
    };

    let unit = TranslationUnit::new(source, options);
    let name = unit.name().to_owned();
    let summary = match output {
        Output::Stdout => unit.write_to(&mut io::stdout().lock())?,
        Output::File(path) => {
            let summary = unit.write_to_path(&path)?;
            tracing::info!(source = %name, output = %path.display(), "wrote C program");
            summary
        }
    };
    tracing::info!(
        source = %name,
        commands = summary.commands,
        max_depth = summary.max_depth,
        "translated"
    );
    Ok(())
}

/// Whether both paths name the same existing file, however they are spelled.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
