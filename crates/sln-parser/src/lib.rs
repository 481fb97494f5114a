//! # sln-parser
//!
//! Parse Visual Studio solution files (`.sln`) into structured values.
//!
//! ## Overview
//!
//! The `sln-parser` crate complements `csproj-parser`:
//! - **sln-parser**: Scans a solution's line grammar (format version,
//!   tooling versions, project records)
//! - **csproj-parser**: Parses each referenced project file
//!
//! A deep parse resolves every project record against the solution
//! directory, parses the ones that exist on disk, and merges their data
//! onto the matching [`ProjectReference`]. Missing or unreadable project
//! files leave their reference untouched; resolution of one reference never
//! aborts the others.
//!
//! ## Example
//!
//! ```ignore
//! use sln_parser::parse_solution;
//! use vsfile::ParseOptions;
//!
//! let solution = parse_solution("path/to/App.sln", &ParseOptions::deep()).await?;
//! for reference in &solution.projects {
//!     if let Some(project) = &reference.project {
//!         println!("{}: {} code files", reference.name, project.code_files.len());
//!     }
//! }
//! ```

mod entity;
mod error;
mod grammar;
mod parser;
mod resolver;

pub use entity::{ProjectReference, Solution};
pub use error::SolutionError;
pub use parser::parse_solution_source;
pub use resolver::{parse_solution, parse_solution_sync};
