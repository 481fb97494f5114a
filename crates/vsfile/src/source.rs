//! Reading parser input that is either a file path or inline document text.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SourceError;

/// Returns true when the input already looks like document contents rather
/// than a file path.
///
/// The check is the presence of a line break. A legitimate path containing
/// a raw newline byte would be misclassified; callers depend on this
/// behavior, so it stays as is.
pub fn is_inline(input: &str) -> bool {
    input.contains('\n') || input.contains('\r')
}

/// Return the document text for `input`, reading the file when the input is
/// a path.
///
/// # Errors
///
/// `SourceError::NotFound` when the named file does not exist,
/// `SourceError::Io` for any other read failure.
pub async fn contents_of(input: &str) -> Result<String, SourceError> {
    if is_inline(input) {
        return Ok(input.to_string());
    }
    tokio::fs::read_to_string(input)
        .await
        .map_err(|e| read_error(input, e))
}

/// Blocking form of [`contents_of`].
pub fn contents_of_sync(input: &str) -> Result<String, SourceError> {
    if is_inline(input) {
        return Ok(input.to_string());
    }
    std::fs::read_to_string(input).map_err(|e| read_error(input, e))
}

fn read_error(input: &str, e: std::io::Error) -> SourceError {
    if e.kind() == ErrorKind::NotFound {
        SourceError::NotFound(PathBuf::from(input))
    } else {
        SourceError::Io {
            path: PathBuf::from(input),
            source: e,
        }
    }
}

/// Existence check used during deep resolution.
pub async fn exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

/// Blocking form of [`exists`].
pub fn exists_sync(path: &Path) -> bool {
    path.exists()
}

/// The directory that relative references inside `input` are resolved
/// against.
///
/// For a file path input this is the containing directory. For inline text
/// there is no containing directory, so the caller-supplied `dir_root` is
/// used instead.
///
/// # Errors
///
/// `SourceError::MissingDirRoot` when the input is inline text and no
/// `dir_root` was supplied.
pub fn directory_of(input: &str, dir_root: Option<&Path>) -> Result<PathBuf, SourceError> {
    if is_inline(input) {
        return dir_root
            .map(Path::to_path_buf)
            .ok_or(SourceError::MissingDirRoot);
    }
    let parent = Path::new(input).parent().unwrap_or_else(|| Path::new(""));
    Ok(parent.to_path_buf())
}
