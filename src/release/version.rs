//! Semantic version parsing for feed-provided version strings

use std::sync::LazyLock;

use regex::Regex;
use semver::Version;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("malformed version: {value}")]
    Malformed {
        value: String,
        #[source]
        source: semver::Error,
    },
}

static SEMANTIC_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([0-9]+)\.([0-9]+)\.([0-9]+)(?:(-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+[0-9A-Za-z.-]+)?",
    )
    .expect("valid regex")
});

/// Parse a version string into a semver::Version, tolerating feed quirks.
///
/// - A leading `v` or `V` is stripped
/// - Partial cores are padded with zeros ("1" -> 1.0.0, "1.2" -> 1.2.0)
/// - Numeric components past the third are kept as build metadata
///   ("1.2.3.4" -> 1.2.3+4)
pub fn parse_version(value: &str) -> Result<Version, VersionError> {
    let normalized = normalize(value);
    Version::parse(&normalized).map_err(|source| VersionError::Malformed {
        value: value.to_string(),
        source,
    })
}

fn normalize(value: &str) -> String {
    let trimmed = value.trim();
    let trimmed = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    let suffix_start = trimmed.find(['-', '+']).unwrap_or(trimmed.len());
    let (core, suffix) = trimmed.split_at(suffix_start);
    let parts: Vec<&str> = core.split('.').collect();

    match parts.len() {
        1 => format!("{}.0.0{}", parts[0], suffix),
        2 => format!("{}.{}.0{}", parts[0], parts[1], suffix),
        3 => trimmed.to_string(),
        _ if parts.iter().all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit())) => {
            let extra = parts[3..].join(".");
            match suffix.split_once('+') {
                Some((pre, build)) => {
                    format!("{}.{}.{}{}+{}.{}", parts[0], parts[1], parts[2], pre, extra, build)
                }
                None => format!("{}.{}.{}{}+{}", parts[0], parts[1], parts[2], suffix, extra),
            }
        }
        _ => trimmed.to_string(),
    }
}

/// Extract every `MAJOR.MINOR.PATCH[-pre][+build]` occurrence from text
///
/// Returns the matches in order of appearance; empty when none are found.
pub fn extract_semantic_versions(data: &str) -> Vec<String> {
    SEMANTIC_VERSION_RE
        .find_iter(data)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", "1.2.3")]
    #[case("v1.2.3", "1.2.3")]
    #[case("V2.0.0", "2.0.0")]
    #[case("1", "1.0.0")]
    #[case("1.2", "1.2.0")]
    #[case("200", "200.0.0")]
    #[case("2.0.0-beta", "2.0.0-beta")]
    #[case("2.0-beta", "2.0.0-beta")]
    #[case("1.2.3.4", "1.2.3+4")]
    #[case("1.2.3.4-rc.1", "1.2.3-rc.1+4")]
    #[case(" 1.0.1 ", "1.0.1")]
    fn parse_version_normalizes_feed_versions(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse_version(input).unwrap().to_string(), expected);
    }

    #[rstest]
    #[case("invalid")]
    #[case("")]
    #[case("1.x.0")]
    #[case("1.0.0.beta")]
    fn parse_version_rejects_malformed_values(#[case] input: &str) {
        let err = parse_version(input).unwrap_err();

        assert_eq!(err.to_string(), format!("malformed version: {}", input));
    }

    #[test]
    fn prerelease_orders_before_release_with_same_core() {
        let beta = parse_version("2.0.0-beta").unwrap();
        let release = parse_version("2.0.0").unwrap();

        assert!(beta < release);
        assert!(parse_version("1.10.0").unwrap() > parse_version("1.9.0").unwrap());
    }

    #[rstest]
    #[case("Version 1", vec![])]
    #[case("Version 1.0", vec![])]
    #[case("Version 1.0.2", vec!["1.0.2"])]
    #[case("Version 1.0.2-alpha", vec!["1.0.2-alpha"])]
    #[case("Version 1.0.2-rc1", vec!["1.0.2-rc1"])]
    #[case("/app/2.0.0/app_2.0.0.dmg", vec!["2.0.0", "2.0.0"])]
    #[case(
        "First is v1.0.1, second is v1.0.2, third is v1.0.3",
        vec!["1.0.1", "1.0.2", "1.0.3"]
    )]
    fn extract_semantic_versions_returns_expected(
        #[case] data: &str,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(extract_semantic_versions(data), expected);
    }
}
