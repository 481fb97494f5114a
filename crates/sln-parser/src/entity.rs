//! Entity types for parsed solution files.

use csproj_parser::Project;
use serde::{Deserialize, Serialize};

/// A parsed solution file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// `Format Version` from the header line, empty when absent.
    pub file_format_version: String,
    /// `VisualStudioVersion` line, empty when absent.
    pub visual_studio_version: String,
    /// `MinimumVisualStudioVersion` line, empty when absent.
    pub minimum_visual_studio_version: String,
    /// Project records in the order they appear in the source text.
    pub projects: Vec<ProjectReference>,
}

/// One `Project("{type}") = "name", "path", "{id}"` record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectReference {
    /// Project GUID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Path to the project file, relative to the solution directory,
    /// normalized.
    pub relative_path: String,
    /// Project type GUID.
    pub project_type_id: String,
    /// Data merged from the referenced project file by a deep parse.
    /// `None` when the reference was not resolved. Flattened on
    /// serialization so the project's fields sit alongside the reference's
    /// own, as one merged record.
    #[serde(flatten)]
    pub project: Option<Project>,
}

impl ProjectReference {
    /// Returns true when a deep parse merged project data onto this
    /// reference.
    pub fn is_resolved(&self) -> bool {
        self.project.is_some()
    }
}
