//! Editor-buffer seam.
//!
//! The conversion pipeline only ever sees an ordered sequence of lines; where
//! those lines live is the host's concern. `FileBuffer` is the standalone
//! host: it reads a rotation file and writes the converted macro back with
//! CRLF line endings.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;


/// Errors reading or writing a line buffer
#[derive(Debug, Error)]
pub enum BufferError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Ordered line source and sink the conversion pipeline runs against.
pub trait LineBuffer {
    /// Read the buffer's current contents as lines.
    fn get_lines(&self) -> Result<Vec<String>, BufferError>;

    /// Replace the buffer's contents with `lines`.
    fn set_lines(&mut self, lines: &[String]) -> Result<(), BufferError>;
}

/// Line buffer backed by a file on disk.
pub struct FileBuffer {
    path: PathBuf,
}

impl FileBuffer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineBuffer for FileBuffer {
    fn get_lines(&self) -> Result<Vec<String>, BufferError> {
        let text = fs::read_to_string(&self.path).map_err(|source| BufferError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(text.lines().map(String::from).collect())
    }

    // Joined with CRLF, no trailing terminator.
    fn set_lines(&mut self, lines: &[String]) -> Result<(), BufferError> {
        fs::write(&self.path, lines.join("\r\n")).map_err(|source| BufferError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
