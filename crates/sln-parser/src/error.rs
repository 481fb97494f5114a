//! Error types for sln-parser.

use thiserror::Error;
use vsfile::SourceError;

/// Errors raised while parsing a solution file.
///
/// Solution text itself always parses (unrecognized lines are skipped), so
/// the only failures are locating or reading the primary input. Reference
/// resolution gaps during a deep parse are not errors; they leave the
/// affected entry unmerged.
#[derive(Debug, Error)]
pub enum SolutionError {
    /// The input could not be located or read, or deep parsing was
    /// requested on inline text without a root directory.
    #[error(transparent)]
    Source(#[from] SourceError),
}
