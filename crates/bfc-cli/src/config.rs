//! Translator options from an optional TOML file plus command-line overrides.
//!
//! Example config file:
//! ```toml
//! indent = { spaces = 4 }
//! tape-size = 65536
//! eof = "zero"
//! brackets = "checked"
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use bfc::{BracketPolicy, Indent, TranslatorOptions};

use crate::args::Args;

/// Builds the options for this run: defaults, then the config file, then
/// flags.
pub fn resolve(args: &Args) -> Result<TranslatorOptions> {
    let mut options = match &args.config {
        Some(path) => load_file(path)?,
        None => TranslatorOptions::default(),
    };

    if let Some(width) = args.spaces {
        options.indent = Indent::spaces(width);
    }
    if let Some(cells) = args.tape_size {
        options.tape_size = cells;
    }
    if let Some(eof) = args.eof {
        options.eof = eof.into();
    }
    if args.permissive {
        options.brackets = BracketPolicy::Permissive;
    }

    tracing::debug!(?options, "resolved translator options");
    Ok(options)
}

/// Parses a TOML options file.
fn load_file(path: &Path) -> Result<TranslatorOptions> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config '{}'", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config '{}'", path.display()))
}
