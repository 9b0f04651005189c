//! Source provider: obtains the complete text of a program before scanning.

use std::{
    fs,
    path::{Path, PathBuf},
};

use bstr::BString;

use crate::Error;

/// Where a program's text comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceLocation {
    /// The data names a file to read in full.
    #[default]
    Disk,
    /// The data is the program text itself.
    Memory,
}

/// The full text of one program, owned and ready to hand to a
/// [`Scanner`](crate::Scanner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    origin: Option<PathBuf>,
    text: BString,
}

impl Source {
    /// Resolves `data` according to `location`: a path for
    /// [`SourceLocation::Disk`], program text for [`SourceLocation::Memory`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Source`] if a disk source cannot be read.
    pub fn load(location: SourceLocation, data: &str) -> Result<Self, Error> {
        match location {
            SourceLocation::Disk => Self::from_path(data),
            SourceLocation::Memory => Ok(Self::from_memory(data)),
        }
    }

    /// Reads the whole file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Source`] if the file is missing or unreadable.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = fs::read(path).map_err(|source| Error::Source {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded source file");
        Ok(Self {
            origin: Some(path.to_path_buf()),
            text: text.into(),
        })
    }

    /// Copies program text that is already in memory.
    pub fn from_memory(text: impl AsRef<[u8]>) -> Self {
        let text = BString::from(text.as_ref());
        tracing::debug!(bytes = text.len(), "loaded in-memory source");
        Self { origin: None, text }
    }

    /// The file this source was read from, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// A human-readable name for diagnostics: the file path or `<memory>`.
    #[must_use]
    pub fn name(&self) -> String {
        self.origin
            .as_ref()
            .map_or_else(|| "<memory>".to_owned(), |p| p.display().to_string())
    }

    /// The raw program text.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_slice()
    }

    /// Gives up the text buffer.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.text.into()
    }
}
