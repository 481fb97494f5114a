//! # csproj-parser
//!
//! Parse Visual Studio project files (`.csproj`) and legacy
//! `packages.config` manifests into structured values.
//!
//! ## Overview
//!
//! The `csproj-parser` crate complements `sln-parser`:
//! - **csproj-parser**: Parses one project file (assembly references, code
//!   files, package references) and its package manifest
//! - **sln-parser**: Parses a solution and, on a deep parse, pulls in each
//!   referenced project via this crate
//!
//! A project file is treated as flat declarative data: item groups are
//! decoded, MSBuild imports, conditions, and property expansion are not
//! evaluated.
//!
//! ## Example
//!
//! ```ignore
//! use csproj_parser::parse_project_sync;
//! use vsfile::ParseOptions;
//!
//! // Deep parse: a packages.config next to the project file replaces
//! // any inline PackageReference items.
//! let options = ParseOptions::deep();
//! let project = parse_project_sync("path/to/App.csproj", &options)?;
//!
//! for reference in &project.references {
//!     println!("{}", reference.assembly_name);
//! }
//! ```

mod entity;
mod error;
mod parser;
mod resolver;

pub use entity::{AssemblyReference, CodeFile, PackageReference, Project};
pub use error::ProjectError;
pub use parser::{parse_packages_source, parse_project_source};
pub use resolver::{parse_packages, parse_packages_sync, parse_project, parse_project_sync};
