//! Entry points for project and manifest parsing, with optional deep
//! resolution of the sibling package manifest.

use std::path::Path;

use tracing::{debug, warn};
use vsfile::{
    contents_of, contents_of_sync, directory_of, exists, exists_sync, ParseOptions, SourceError,
};

use crate::entity::{PackageReference, Project};
use crate::error::ProjectError;
use crate::parser::{parse_packages_source, parse_project_source};

/// Name of the legacy manifest resolved next to a project file.
const PACKAGE_MANIFEST: &str = "packages.config";

/// Parse a package manifest from a file path or inline text.
pub async fn parse_packages(input: &str) -> Result<Vec<PackageReference>, ProjectError> {
    let contents = contents_of(input).await?;
    parse_packages_source(&contents)
}

/// Blocking form of [`parse_packages`].
pub fn parse_packages_sync(input: &str) -> Result<Vec<PackageReference>, ProjectError> {
    let contents = contents_of_sync(input)?;
    parse_packages_source(&contents)
}

/// Parse a project file from a file path or inline text.
///
/// With `deep_parse` set, a `packages.config` next to the project file
/// replaces any packages collected from inline `PackageReference` groups.
/// A missing manifest leaves the inline packages in place; a manifest that
/// fails to parse is logged and likewise leaves them in place.
///
/// # Errors
///
/// Source errors for the primary input, `ProjectError::Xml`/`NoRoot` for a
/// malformed document, and `SourceError::MissingDirRoot` when deep parsing
/// inline text without a `dir_root`.
pub async fn parse_project(input: &str, options: &ParseOptions) -> Result<Project, ProjectError> {
    let dir = deep_parse_dir(input, options)?;
    let contents = contents_of(input).await?;
    let mut project = parse_project_source(&contents)?;

    if let Some(dir) = dir {
        let manifest = dir.join(PACKAGE_MANIFEST);
        if exists(&manifest).await {
            let parsed = parse_packages(&manifest.to_string_lossy()).await;
            merge_manifest(&mut project, parsed, &manifest);
        } else {
            debug!("no package manifest at {}", manifest.display());
        }
    }
    Ok(project)
}

/// Blocking form of [`parse_project`].
pub fn parse_project_sync(input: &str, options: &ParseOptions) -> Result<Project, ProjectError> {
    let dir = deep_parse_dir(input, options)?;
    let contents = contents_of_sync(input)?;
    let mut project = parse_project_source(&contents)?;

    if let Some(dir) = dir {
        let manifest = dir.join(PACKAGE_MANIFEST);
        if exists_sync(&manifest) {
            let parsed = parse_packages_sync(&manifest.to_string_lossy());
            merge_manifest(&mut project, parsed, &manifest);
        } else {
            debug!("no package manifest at {}", manifest.display());
        }
    }
    Ok(project)
}

/// Resolve the reference directory up front so a missing `dir_root` fails
/// before any file is read.
fn deep_parse_dir(
    input: &str,
    options: &ParseOptions,
) -> Result<Option<std::path::PathBuf>, SourceError> {
    if !options.deep_parse {
        return Ok(None);
    }
    directory_of(input, options.dir_root.as_deref()).map(Some)
}

fn merge_manifest(
    project: &mut Project,
    parsed: Result<Vec<PackageReference>, ProjectError>,
    manifest: &Path,
) {
    match parsed {
        Ok(packages) => project.packages = packages,
        Err(e) => warn!("failed to parse {}: {}", manifest.display(), e),
    }
}
