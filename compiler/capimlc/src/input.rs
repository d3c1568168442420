//! Loading CAPIML source files.
//!
//! A failed load is a [`LoadError`] returned to the caller; deciding whether
//! that ends the process is up to the binary.

use std::io;
use std::path::{Path, PathBuf};

use capiml_lexer_core::SourceBuffer;

#[cfg(test)]
mod tests;

/// Why a source file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("'{}' contains invalid UTF-8 data", path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Classify an I/O error from reading `path`.
    #[cold]
    fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied { path },
            io::ErrorKind::InvalidData => LoadError::InvalidUtf8 { path },
            _ => LoadError::Io { path, source: err },
        }
    }

    /// The path the failed load was for.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path }
            | LoadError::PermissionDenied { path }
            | LoadError::InvalidUtf8 { path }
            | LoadError::Io { path, .. } => path,
        }
    }
}

/// A CAPIML file held in a sentinel-terminated buffer.
///
/// Tokens scanned from [`buffer()`](Self::buffer) borrow the file, so keep
/// it alive for as long as the tokens are in use.
#[derive(Clone, Debug)]
pub struct SourceFile {
    path: PathBuf,
    buffer: SourceBuffer,
}

impl SourceFile {
    /// Read the whole file at `path` into a new buffer.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| LoadError::from_io(path, e))?;
        tracing::debug!(bytes = text.len(), "loaded source");
        Ok(Self::from_text(path, &text))
    }

    /// Wrap already-loaded text, e.g. from stdin or a test.
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        SourceFile {
            path: path.into(),
            buffer: SourceBuffer::new(text),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn buffer(&self) -> &SourceBuffer {
        &self.buffer
    }

    /// Line and column (both 1-based) of a byte offset, for messages.
    ///
    /// Columns count bytes, not characters.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let bytes = self.buffer.as_bytes();
        let offset = (offset as usize).min(bytes.len());
        let before = &bytes[..offset];
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        let col = offset - line_start + 1;
        (
            u32::try_from(line).unwrap_or(u32::MAX),
            u32::try_from(col).unwrap_or(u32::MAX),
        )
    }
}
