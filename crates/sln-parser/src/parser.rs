//! Line scanner for solution documents.

use crate::entity::Solution;
use crate::grammar;

/// Parse solution text into a [`Solution`].
///
/// Line endings are normalized (`\r\n` and bare `\r` become `\n`) before a
/// single forward pass offers every line to the grammar matchers. Version
/// matches overwrite the corresponding field (last match wins), project
/// records append in encounter order. Lines that match nothing are skipped,
/// so malformed input never fails.
pub fn parse_solution_source(text: &str) -> Solution {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut solution = Solution::default();
    for line in text.split('\n') {
        if let Some(reference) = grammar::match_project_line(line) {
            solution.projects.push(reference);
        }
        if let Some(version) = grammar::match_format_version(line) {
            solution.file_format_version = version.to_string();
        }
        if let Some(version) = grammar::match_visual_studio_version(line) {
            solution.visual_studio_version = version.to_string();
        }
        if let Some(version) = grammar::match_minimum_visual_studio_version(line) {
            solution.minimum_visual_studio_version = version.to_string();
        }
    }
    solution
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTION: &str = "\u{feff}\r\nMicrosoft Visual Studio Solution File, Format Version 12.00\r\n# Visual Studio Version 17\r\nVisualStudioVersion = 17.13.35931.197\r\nMinimumVisualStudioVersion = 10.0.40219.1\r\nProject(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"App\", \"App\\App.csproj\", \"{11111111-2222-3333-4444-555555555555}\"\r\nEndProject\r\nProject(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"Lib\", \"Lib\\Lib.csproj\", \"{22222222-2222-3333-4444-555555555555}\"\r\nEndProject\r\nGlobal\r\n\tGlobalSection(SolutionConfigurationPlatforms) = preSolution\r\n\t\tDebug|Any CPU = Debug|Any CPU\r\n\tEndGlobalSection\r\nEndGlobal\r\n";

    #[test]
    fn test_parse_full_solution() {
        let solution = parse_solution_source(SOLUTION);

        assert_eq!(solution.file_format_version, "12.00");
        assert_eq!(solution.visual_studio_version, "17.13.35931.197");
        assert_eq!(solution.minimum_visual_studio_version, "10.0.40219.1");

        assert_eq!(solution.projects.len(), 2);
        assert_eq!(solution.projects[0].name, "App");
        assert_eq!(solution.projects[0].relative_path, "App/App.csproj");
        assert_eq!(solution.projects[1].name, "Lib");
    }

    #[test]
    fn test_project_order_matches_source_order() {
        let text = "Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"C\", \"C\\C.csproj\", \"{33333333-2222-3333-4444-555555555555}\"\nProject(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"A\", \"A\\A.csproj\", \"{11111111-2222-3333-4444-555555555555}\"\nProject(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"B\", \"B\\B.csproj\", \"{22222222-2222-3333-4444-555555555555}\"\n";

        let solution = parse_solution_source(text);
        let names: Vec<&str> = solution.projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn test_bare_carriage_returns_are_line_breaks() {
        let text = "Microsoft Visual Studio Solution File, Format Version 11.00\rVisualStudioVersion = 16.0.28729.10\r";
        let solution = parse_solution_source(text);
        assert_eq!(solution.file_format_version, "11.00");
        assert_eq!(solution.visual_studio_version, "16.0.28729.10");
    }

    #[test]
    fn test_garbage_text_parses_to_defaults() {
        let solution = parse_solution_source("not a solution\nat all\n");
        assert_eq!(solution, Solution::default());
        assert!(solution.projects.is_empty());
        assert_eq!(solution.file_format_version, "");
    }

    #[test]
    fn test_parse_twice_is_idempotent() {
        assert_eq!(parse_solution_source(SOLUTION), parse_solution_source(SOLUTION));
    }
}
