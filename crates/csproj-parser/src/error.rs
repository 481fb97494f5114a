//! Error types for csproj-parser.

use thiserror::Error;
use vsfile::SourceError;

/// Errors raised while parsing a project file or package manifest.
///
/// During a deep parse, errors from *referenced* files (a missing or
/// malformed `packages.config`) are never surfaced through this type; they
/// leave the already-parsed data in place.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The primary input could not be located or read, or deep parsing was
    /// requested on inline text without a root directory.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The document is not well-formed XML.
    #[error("malformed project xml: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The document parsed but has no root element.
    #[error("no root element in project file")]
    NoRoot,
}
