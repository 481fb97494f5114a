//! Options shared by the project and solution parsers.

use std::path::PathBuf;

/// Parse configuration accepted by `parse_project` and `parse_solution`.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Follow file references: a solution's project files, a project's
    /// sibling `packages.config`.
    pub deep_parse: bool,
    /// Directory that relative references are resolved against when the
    /// input is inline text instead of a file path. Ignored for path
    /// inputs, required for a deep parse of inline text.
    pub dir_root: Option<PathBuf>,
}

impl ParseOptions {
    /// Options with `deep_parse` enabled.
    pub fn deep() -> Self {
        ParseOptions {
            deep_parse: true,
            dir_root: None,
        }
    }

    /// Set the directory used to resolve references for inline input.
    pub fn with_dir_root(mut self, dir_root: impl Into<PathBuf>) -> Self {
        self.dir_root = Some(dir_root.into());
        self
    }
}
