use std::{
    fs,
    io::{self, BufWriter, Write},
    path::Path,
};

use tempfile::NamedTempFile;

use crate::{Error, Scanner, Source, SourceLocation, Summary, TranslatorOptions, translate};

/// One translation job: a scanner over a single program plus the options to
/// translate it with.
///
/// ```rust
/// use bfc::{SourceLocation, TranslationUnit, TranslatorOptions};
///
/// let unit = TranslationUnit::load(SourceLocation::Memory, ",.", TranslatorOptions::default())?;
/// let mut out = Vec::new();
/// let summary = unit.write_to(&mut out)?;
/// assert_eq!(summary.commands, 2);
/// # Ok::<(), bfc::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct TranslationUnit {
    name: String,
    scanner: Scanner,
    options: TranslatorOptions,
}

impl TranslationUnit {
    /// Wraps an already loaded source.
    #[must_use]
    pub fn new(source: Source, options: TranslatorOptions) -> Self {
        Self {
            name: source.name(),
            scanner: Scanner::from_source(source),
            options,
        }
    }

    /// Loads the source from `location` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Source`] if a disk source cannot be read.
    pub fn load(
        location: SourceLocation,
        data: &str,
        options: TranslatorOptions,
    ) -> Result<Self, Error> {
        Ok(Self::new(Source::load(location, data)?, options))
    }

    /// Diagnostic name of the source: its path or `<memory>`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The options this unit translates with.
    #[must_use]
    pub fn options(&self) -> &TranslatorOptions {
        &self.options
    }

    /// Translates into `sink`.
    ///
    /// # Errors
    ///
    /// See [`Translator::translate`](crate::Translator::translate).
    pub fn write_to<W: Write + ?Sized>(mut self, sink: &mut W) -> Result<Summary, Error> {
        let _span = tracing::debug_span!("translate", source = %self.name).entered();
        translate(&mut self.scanner, sink, self.options)
    }

    /// Translates into the file at `path`.
    ///
    /// The program is written to a temporary file next to `path` and moved
    /// into place only after translation succeeds, so a failed job leaves any
    /// existing file at `path` untouched. A replaced file keeps its
    /// permissions.
    ///
    /// # Errors
    ///
    /// - [`Error::Sink`] if the temporary file cannot be created, cannot take
    ///   over the permissions of an existing file, or cannot be moved to
    ///   `path`. Nothing is translated if the file cannot be created.
    /// - Any error from [`write_to`](Self::write_to).
    pub fn write_to_path(self, path: impl AsRef<Path>) -> Result<Summary, Error> {
        let path = path.as_ref();
        let sink_error = |source| Error::Sink {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file = temp_file_in(dir).map_err(sink_error)?;
        match fs::metadata(path) {
            Ok(existing) => file
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(sink_error)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(sink_error(err)),
        }

        let mut sink = BufWriter::new(file);
        let summary = self.write_to(&mut sink)?;
        let file = sink
            .into_inner()
            .map_err(|err| Error::Emit(err.into_error()))?;

        file.persist(path).map_err(|err| sink_error(err.error))?;
        tracing::debug!(path = %path.display(), "wrote translated program");
        Ok(summary)
    }
}

/// A temporary file in `dir`. On unix it is opened with mode 0666 less the
/// process umask, like any newly created output file, instead of the
/// owner-only default.
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".bfc");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
