//! # vsparse
//!
//! Parsers for Visual Studio build metadata: solution files (`.sln`),
//! project files (`.csproj`), and legacy `packages.config` manifests.
//!
//! ## Overview
//!
//! The workspace splits the work across three crates, re-exported here:
//! - **sln-parser**: Scans a solution's line grammar into a [`Solution`]
//! - **csproj-parser**: Decodes a project's item groups into a [`Project`]
//!   and a manifest into [`PackageReference`]s
//! - **vsfile**: Input access (file path or inline text), existence checks,
//!   and path normalization
//!
//! Every operation comes in an async form and a blocking `_sync` form; the
//! two share the same pure parsing functions, so results never diverge.
//! Inputs may be a file path or inline document text; text is recognized by
//! the presence of a line break.
//!
//! A *deep parse* ([`ParseOptions::deep`]) follows file references: a
//! solution pulls in every referenced project that exists on disk, and a
//! project swaps its inline package items for a sibling `packages.config`.
//! Missing or unreadable referenced files leave their entry unmerged; the
//! primary parse still succeeds.
//!
//! ## Example
//!
//! ```ignore
//! use vsparse::{parse_solution_sync, ParseOptions};
//!
//! let solution = parse_solution_sync("App.sln", &ParseOptions::deep())?;
//! for reference in &solution.projects {
//!     match &reference.project {
//!         Some(project) => println!("{}: {} packages", reference.name, project.packages.len()),
//!         None => println!("{}: unresolved", reference.name),
//!     }
//! }
//! ```

mod version;

pub use csproj_parser::{
    parse_packages, parse_packages_source, parse_packages_sync, parse_project,
    parse_project_source, parse_project_sync, AssemblyReference, CodeFile, PackageReference,
    Project, ProjectError,
};
pub use sln_parser::{
    parse_solution, parse_solution_source, parse_solution_sync, ProjectReference, Solution,
    SolutionError,
};
pub use version::{parse_semver, SemverParts};
pub use vsfile::{normalize_path, ParseOptions, SourceError};
