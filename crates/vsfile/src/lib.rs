//! # vsfile
//!
//! Input access shared by the solution and project parsers.
//!
//! The parsers accept either a file path or inline document text. This crate
//! owns that distinction: reading contents (blocking and async), existence
//! checks, resolving the directory that relative references are joined
//! against, and normalizing the backslash paths found inside solution and
//! project files.

mod error;
mod options;
mod path;
mod source;

pub use error::SourceError;
pub use options::ParseOptions;
pub use path::normalize_path;
pub use source::{contents_of, contents_of_sync, directory_of, exists, exists_sync, is_inline};
