//! Line grammar for solution files.
//!
//! Four fixed patterns, each anchored at line start and tried independently.
//! A line of expected input matches at most one of them, but nothing here
//! enforces mutual exclusion; the scanner offers every line to all four.

use std::sync::OnceLock;

use regex::Regex;
use vsfile::normalize_path;

use crate::entity::ProjectReference;

// Static regex patterns using OnceLock
static FORMAT_VERSION_RE: OnceLock<Regex> = OnceLock::new();
static VS_VERSION_RE: OnceLock<Regex> = OnceLock::new();
static MIN_VS_VERSION_RE: OnceLock<Regex> = OnceLock::new();
static PROJECT_LINE_RE: OnceLock<Regex> = OnceLock::new();

/// Uppercase 8-4-4-4-12 hex groups, as written in solution files.
const GUID: &str = "[A-Z0-9]{8}-[A-Z0-9]{4}-[A-Z0-9]{4}-[A-Z0-9]{4}-[A-Z0-9]{12}";

fn format_version_re() -> &'static Regex {
    FORMAT_VERSION_RE.get_or_init(|| {
        Regex::new(r"^Microsoft Visual Studio Solution File, Format Version (\d+\.\d+)").unwrap()
    })
}

fn vs_version_re() -> &'static Regex {
    VS_VERSION_RE.get_or_init(|| Regex::new(r"^VisualStudioVersion = (\d+(?:\.\d+){3})").unwrap())
}

fn min_vs_version_re() -> &'static Regex {
    MIN_VS_VERSION_RE
        .get_or_init(|| Regex::new(r"^MinimumVisualStudioVersion = (\d+(?:\.\d+){3})").unwrap())
}

fn project_line_re() -> &'static Regex {
    PROJECT_LINE_RE.get_or_init(|| {
        Regex::new(&format!(
            r#"^Project\("\{{({GUID})\}}"\) = "([^"]+)", "([^"]+)", "\{{({GUID})\}}""#
        ))
        .unwrap()
    })
}

/// Match `Microsoft Visual Studio Solution File, Format Version <major>.<minor>`.
pub(crate) fn match_format_version(line: &str) -> Option<&str> {
    format_version_re()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Match `VisualStudioVersion = <four-part dotted version>`.
pub(crate) fn match_visual_studio_version(line: &str) -> Option<&str> {
    vs_version_re()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Match `MinimumVisualStudioVersion = <four-part dotted version>`.
pub(crate) fn match_minimum_visual_studio_version(line: &str) -> Option<&str> {
    min_vs_version_re()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Match a `Project("{type}") = "name", "path", "{id}"` record.
///
/// The relative path is normalized before storage.
pub(crate) fn match_project_line(line: &str) -> Option<ProjectReference> {
    let caps = project_line_re().captures(line)?;
    Some(ProjectReference {
        id: caps[4].to_string(),
        name: caps[2].to_string(),
        relative_path: normalize_path(&caps[3]),
        project_type_id: caps[1].to_string(),
        project: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_format_version() {
        let line = "Microsoft Visual Studio Solution File, Format Version 12.00";
        assert_eq!(match_format_version(line), Some("12.00"));
        assert_eq!(match_format_version("Format Version 12.00"), None);
    }

    #[test]
    fn test_version_lines_round_trip() {
        for version in ["17.13.35931.197", "16.0.28729.10", "10.0.40219.1", "0.0.0.0"] {
            let line = format!("VisualStudioVersion = {version}");
            assert_eq!(match_visual_studio_version(&line), Some(version));

            let line = format!("MinimumVisualStudioVersion = {version}");
            assert_eq!(match_minimum_visual_studio_version(&line), Some(version));
        }
    }

    #[test]
    fn test_version_matchers_require_four_parts() {
        assert_eq!(match_visual_studio_version("VisualStudioVersion = 17.13"), None);
        assert_eq!(
            match_minimum_visual_studio_version("MinimumVisualStudioVersion = ten"),
            None
        );
    }

    #[test]
    fn test_match_project_line() {
        let line = r#"Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "App", "App\App.csproj", "{11111111-2222-3333-4444-555555555555}""#;
        let reference = match_project_line(line).unwrap();

        assert_eq!(reference.project_type_id, "FAE04EC0-301F-11D3-BF4B-00C04F79EFBC");
        assert_eq!(reference.name, "App");
        assert_eq!(reference.relative_path, "App/App.csproj");
        assert_eq!(reference.id, "11111111-2222-3333-4444-555555555555");
        assert!(!reference.is_resolved());
    }

    #[test]
    fn test_lowercase_guid_is_rejected() {
        let line = r#"Project("{fae04ec0-301f-11d3-bf4b-00c04f79efbc}") = "App", "App\App.csproj", "{11111111-2222-3333-4444-555555555555}""#;
        assert!(match_project_line(line).is_none());
    }

    #[test]
    fn test_unrelated_lines_do_not_match() {
        for line in ["", "Global", "EndProject", "\tGlobalSection(SolutionProperties) = preSolution"] {
            assert!(match_format_version(line).is_none());
            assert!(match_visual_studio_version(line).is_none());
            assert!(match_minimum_visual_studio_version(line).is_none());
            assert!(match_project_line(line).is_none());
        }
    }
}
