//! Semantic-version helper for the four-part versions found in build
//! metadata.

use semver::Version;

/// A version parsed down to semver's three components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemverParts {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// The three-component form, e.g. `"4.0.0"`.
    pub version: String,
    /// The input as given, including any fourth component.
    pub original: String,
}

/// Parse a version string, tolerating the four-part
/// `Major.Minor.Build.Revision` form used by assembly versions.
///
/// Anything past the third dot is dropped before parsing, so
/// `"4.0.0.0"` parses as `4.0.0`. Returns `None` for empty input or for
/// input the `semver` crate rejects (including versions with fewer than
/// three components).
pub fn parse_semver(input: &str) -> Option<SemverParts> {
    if input.is_empty() {
        return None;
    }

    let truncated = match input.match_indices('.').nth(2) {
        Some((index, _)) => &input[..index],
        None => input,
    };

    let parsed = Version::parse(truncated).ok()?;
    Some(SemverParts {
        major: parsed.major,
        minor: parsed.minor,
        patch: parsed.patch,
        version: parsed.to_string(),
        original: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_part_version_is_truncated() {
        let parts = parse_semver("4.0.30319.42000").unwrap();
        assert_eq!(parts.major, 4);
        assert_eq!(parts.minor, 0);
        assert_eq!(parts.patch, 30319);
        assert_eq!(parts.version, "4.0.30319");
        assert_eq!(parts.original, "4.0.30319.42000");
    }

    #[test]
    fn test_three_part_version_passes_through() {
        let parts = parse_semver("13.0.3").unwrap();
        assert_eq!(parts.version, "13.0.3");
        assert_eq!(parts.original, "13.0.3");
    }

    #[test]
    fn test_unparseable_input_is_none() {
        assert_eq!(parse_semver(""), None);
        assert_eq!(parse_semver("not a version"), None);
        assert_eq!(parse_semver("1.2"), None);
    }
}
