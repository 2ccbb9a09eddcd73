//! Release value object

use chrono::{DateTime, FixedOffset};
use semver::Version;

use crate::release::download::Download;
use crate::release::version::{VersionError, parse_version};

/// A single application release extracted from a feed
///
/// Built once during unmarshaling through the consuming `with_*` methods and
/// only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    version: Version,
    build: String,
    title: String,
    description: String,
    release_notes_link: String,
    minimum_system_version: String,
    published: Option<DateTime<FixedOffset>>,
    is_prerelease: bool,
    downloads: Vec<Download>,
}

impl Release {
    /// Create a release from a version string and an optional build
    ///
    /// The release is flagged as a pre-release when the parsed version
    /// carries a pre-release suffix.
    pub fn new(version: &str, build: &str) -> Result<Self, VersionError> {
        let version = parse_version(version)?;
        let is_prerelease = !version.pre.is_empty();

        Ok(Self {
            version,
            build: build.to_string(),
            title: String::new(),
            description: String::new(),
            release_notes_link: String::new(),
            minimum_system_version: String::new(),
            published: None,
            is_prerelease,
            downloads: Vec::new(),
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_release_notes_link(mut self, link: impl Into<String>) -> Self {
        self.release_notes_link = link.into();
        self
    }

    pub fn with_minimum_system_version(mut self, version: impl Into<String>) -> Self {
        self.minimum_system_version = version.into();
        self
    }

    /// Set the publish date from its textual form; unparsable dates leave it unset
    pub fn with_published(mut self, value: &str) -> Self {
        self.published = parse_published(value);
        if self.published.is_none() && !value.trim().is_empty() {
            tracing::debug!(value = %value, "Ignoring unparsable published date");
        }
        self
    }

    /// Mark the release as unstable based on a provider-specific flag
    pub fn with_prerelease_flag(mut self, flagged: bool) -> Self {
        self.is_prerelease = self.is_prerelease || flagged;
        self
    }

    pub fn with_download(mut self, download: Download) -> Self {
        self.downloads.push(download);
        self
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn build(&self) -> &str {
        &self.build
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn release_notes_link(&self) -> &str {
        &self.release_notes_link
    }

    pub fn minimum_system_version(&self) -> &str {
        &self.minimum_system_version
    }

    pub fn published(&self) -> Option<&DateTime<FixedOffset>> {
        self.published.as_ref()
    }

    pub fn is_prerelease(&self) -> bool {
        self.is_prerelease
    }

    pub fn downloads(&self) -> &[Download] {
        &self.downloads
    }
}

/// Parse an RSS (RFC 2822) or Atom (RFC 3339) date
///
/// Also accepts the `UTC` zone name SourceForge emits, which RFC 2822 doesn't
/// allow.
pub fn parse_published(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc2822(value)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .ok()
        .or_else(|| {
            let without_zone = value
                .strip_suffix(" UTC")
                .or_else(|| value.strip_suffix(" UT"))
                .or_else(|| value.strip_suffix(" GMT"))?;
            DateTime::parse_from_rfc2822(&format!("{} +0000", without_zone)).ok()
        })
}
