//! Entity types for parsed project files.

use serde::{Deserialize, Serialize};

/// A parsed project file.
///
/// All three sequences accumulate across every matching item group in the
/// source, preserving group order, then item order within a group. They are
/// empty, never absent, when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// `<Reference>` assembly entries.
    pub references: Vec<AssemblyReference>,
    /// `<Compile>` source file entries.
    pub code_files: Vec<CodeFile>,
    /// `<PackageReference>` entries, or the sibling `packages.config`
    /// contents after a deep parse.
    pub packages: Vec<PackageReference>,
}

/// A single `<Reference>` entry.
///
/// The optional fields come from the comma-separated `Key=Value` tail of the
/// `Include` attribute. Absent fields are `None`, kept distinguishable from
/// an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyReference {
    pub assembly_name: String,
    pub version: Option<String>,
    pub culture: Option<String>,
    pub processor_architecture: Option<String>,
    pub public_key_token: Option<String>,
    /// Normalized contents of a `<HintPath>` child, when present.
    pub hint_path: Option<String>,
}

impl AssemblyReference {
    /// Returns true when the reference carries a `PublicKeyToken`.
    pub fn is_strong_named(&self) -> bool {
        self.public_key_token.is_some()
    }
}

/// A single `<Compile>` entry: one source file path, normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFile {
    pub file_name: String,
}

/// A package dependency.
///
/// Produced by two parse paths mapped onto the same shape: project
/// `<PackageReference Include=... Version=...>` items and manifest
/// `<package id=... version=...>` rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageReference {
    pub name: String,
    pub version: String,
    pub target_framework: String,
}
