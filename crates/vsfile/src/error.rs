//! Error types for vsfile.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating or reading parser input.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The named input file does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Any other I/O failure while reading the input.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Deep parsing was requested on inline text without a root directory.
    #[error("could not determine root directory, set `dir_root` when deep parsing inline text")]
    MissingDirRoot,
}

impl SourceError {
    /// Returns true if the input file was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound(_))
    }
}
