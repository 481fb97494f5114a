//! Deep resolution of a solution's project references.
//!
//! Each reference resolves independently: a missing or unreadable project
//! file is a no-op for that entry, never a failure of the solution parse.

use std::path::PathBuf;

use futures::future::join_all;
use tracing::{debug, warn};
use vsfile::{
    contents_of, contents_of_sync, directory_of, exists, exists_sync, ParseOptions, SourceError,
};

use csproj_parser::{parse_project, parse_project_sync, Project};

use crate::entity::Solution;
use crate::error::SolutionError;
use crate::parser::parse_solution_source;

/// Parse a solution from a file path or inline text.
///
/// With `deep_parse` set, every project record with a non-empty relative
/// path is resolved against the solution directory and, when the file
/// exists, parsed as a project (deep parsing propagated) and merged onto
/// its [`ProjectReference`](crate::ProjectReference). References resolve
/// concurrently; results are merged back by original index once all have
/// completed.
///
/// # Errors
///
/// Source errors for the primary input, and `SourceError::MissingDirRoot`
/// when deep parsing inline text without a `dir_root`.
pub async fn parse_solution(input: &str, options: &ParseOptions) -> Result<Solution, SolutionError> {
    let dir = deep_parse_dir(input, options)?;
    let contents = contents_of(input).await?;
    let mut solution = parse_solution_source(&contents);

    if let Some(dir) = dir {
        let tasks = solution.projects.iter().map(|reference| {
            let location = (!reference.relative_path.is_empty())
                .then(|| dir.join(&reference.relative_path));
            resolve_reference(location, options)
        });
        let resolved = join_all(tasks).await;

        for (reference, project) in solution.projects.iter_mut().zip(resolved) {
            if let Some(project) = project {
                reference.project = Some(project);
            }
        }
    }
    Ok(solution)
}

/// Blocking form of [`parse_solution`]: references resolve sequentially,
/// in record order.
pub fn parse_solution_sync(input: &str, options: &ParseOptions) -> Result<Solution, SolutionError> {
    let dir = deep_parse_dir(input, options)?;
    let contents = contents_of_sync(input)?;
    let mut solution = parse_solution_source(&contents);

    if let Some(dir) = dir {
        for reference in &mut solution.projects {
            if reference.relative_path.is_empty() {
                continue;
            }
            let location = dir.join(&reference.relative_path);
            if !exists_sync(&location) {
                debug!("referenced project not found at {}", location.display());
                continue;
            }
            match parse_project_sync(&location.to_string_lossy(), options) {
                Ok(project) => reference.project = Some(project),
                Err(e) => warn!("failed to parse {}: {}", location.display(), e),
            }
        }
    }
    Ok(solution)
}

/// Resolve the reference directory up front so a missing `dir_root` fails
/// before any file is read.
fn deep_parse_dir(input: &str, options: &ParseOptions) -> Result<Option<PathBuf>, SourceError> {
    if !options.deep_parse {
        return Ok(None);
    }
    directory_of(input, options.dir_root.as_deref()).map(Some)
}

/// Resolve one project reference to its parsed project, or `None` when
/// there is nothing to merge.
async fn resolve_reference(location: Option<PathBuf>, options: &ParseOptions) -> Option<Project> {
    let location = location?;
    if !exists(&location).await {
        debug!("referenced project not found at {}", location.display());
        return None;
    }
    match parse_project(&location.to_string_lossy(), options).await {
        Ok(project) => Some(project),
        Err(e) => {
            warn!("failed to parse {}: {}", location.display(), e);
            None
        }
    }
}
