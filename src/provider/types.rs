//! Provider tag and feed classification

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use regex::bytes::Regex as BytesRegex;

/// Vendor dialect a feed conforms to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Provider {
    /// No supported dialect was recognized
    #[default]
    Unknown,
    /// RSS feed generated by the Sparkle framework
    SparkleRssFeed,
    /// RSS feed of project files generated by SourceForge
    SourceForgeRssFeed,
    /// Atom feed of repository releases generated by GitHub
    GitHubAtomFeed,
}

impl Provider {
    /// Returns the identifier used in configuration and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Unknown => "unknown",
            Provider::SparkleRssFeed => "sparkle_rss_feed",
            Provider::SourceForgeRssFeed => "sourceforge_rss_feed",
            Provider::GitHubAtomFeed => "github_atom_feed",
        }
    }

    /// Returns the human readable dialect name
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Unknown => "Unknown",
            Provider::SparkleRssFeed => "Sparkle RSS Feed",
            Provider::SourceForgeRssFeed => "SourceForge RSS Feed",
            Provider::GitHubAtomFeed => "GitHub Atom Feed",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Provider {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(Provider::Unknown),
            "sparkle_rss_feed" => Ok(Provider::SparkleRssFeed),
            "sourceforge_rss_feed" => Ok(Provider::SourceForgeRssFeed),
            "github_atom_feed" => Ok(Provider::GitHubAtomFeed),
            _ => Err(()),
        }
    }
}

static SPARKLE_CONTENT_RE: LazyLock<BytesRegex> = LazyLock::new(|| {
    BytesRegex::new(r"(?s)(<rss.*xmlns:sparkle)|(<rss.*<enclosure)").expect("valid regex")
});

static SOURCEFORGE_CONTENT_RE: LazyLock<BytesRegex> = LazyLock::new(|| {
    BytesRegex::new(r"(?s)(<rss.*xmlns:sf)|(<channel.*xmlns:sf)").expect("valid regex")
});

static GITHUB_CONTENT_RE: LazyLock<BytesRegex> =
    LazyLock::new(|| BytesRegex::new(r"(?s)<feed.*<id>tag:github\.com").expect("valid regex"));

static SOURCEFORGE_LOCATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"sourceforge\.net/projects/.+/rss").expect("valid regex"));

static GITHUB_LOCATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com/(?P<user>[^/]+)/(?P<repo>[^/]+)/releases\.atom").expect("valid regex")
});

/// Detect the provider from raw feed content
///
/// Checks run in a fixed order (Sparkle, SourceForge, GitHub) and the first
/// match wins. Anything unrecognized is [`Provider::Unknown`].
pub fn classify_by_content(content: &[u8]) -> Provider {
    if SPARKLE_CONTENT_RE.is_match(content) {
        Provider::SparkleRssFeed
    } else if SOURCEFORGE_CONTENT_RE.is_match(content) {
        Provider::SourceForgeRssFeed
    } else if GITHUB_CONTENT_RE.is_match(content) {
        Provider::GitHubAtomFeed
    } else {
        Provider::Unknown
    }
}

/// Detect the provider from the location a feed is served from
///
/// Only web-service specific feeds can be recognized this way: SourceForge
/// project RSS and GitHub releases Atom URLs.
pub fn classify_by_locator(locator: &str) -> Provider {
    if SOURCEFORGE_LOCATOR_RE.is_match(locator) {
        Provider::SourceForgeRssFeed
    } else if GITHUB_LOCATOR_RE.is_match(locator) {
        Provider::GitHubAtomFeed
    } else {
        Provider::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SPARKLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rss xmlns:sparkle="http://www.andymatuschak.org/xml-namespaces/sparkle" version="2.0">
  <channel><title>App</title></channel>
</rss>"#;

    const SPARKLE_WITHOUT_NAMESPACE: &str = r#"<rss version="2.0"><channel><item>
<enclosure url="https://example.com/app.dmg" version="100" length="1" type="application/octet-stream"/>
</item></channel></rss>"#;

    const SOURCEFORGE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rss xmlns:sf="https://sourceforge.net/api/sfelements.rdf#" version="2.0">
  <channel><title>Example Files</title></channel>
</rss>"#;

    const SOURCEFORGE_CHANNEL_NAMESPACE: &str = r#"<rss version="2.0">
  <channel xmlns:sf="https://sourceforge.net/api/sfelements.rdf#"><title>Example Files</title></channel>
</rss>"#;

    const GITHUB: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xml:lang="en-US">
  <id>tag:github.com,2008:https://github.com/example/app/releases</id>
</feed>"#;

    #[rstest]
    #[case(SPARKLE, Provider::SparkleRssFeed)]
    #[case(SPARKLE_WITHOUT_NAMESPACE, Provider::SparkleRssFeed)]
    #[case(SOURCEFORGE, Provider::SourceForgeRssFeed)]
    #[case(SOURCEFORGE_CHANNEL_NAMESPACE, Provider::SourceForgeRssFeed)]
    #[case(GITHUB, Provider::GitHubAtomFeed)]
    #[case("test", Provider::Unknown)]
    #[case("", Provider::Unknown)]
    #[case("<rss version=\"2.0\"><channel></channel></rss>", Provider::Unknown)]
    #[case("<feed><id>tag:example.com,2008</id></feed>", Provider::Unknown)]
    fn classify_by_content_returns_expected(#[case] content: &str, #[case] expected: Provider) {
        assert_eq!(classify_by_content(content.as_bytes()), expected);
    }

    #[rstest]
    #[case(
        "https://sourceforge.net/projects/example/rss",
        Provider::SourceForgeRssFeed
    )]
    #[case(
        "https://sourceforge.net/projects/example/rss?path=/app",
        Provider::SourceForgeRssFeed
    )]
    #[case(
        "https://github.com/example/app/releases.atom",
        Provider::GitHubAtomFeed
    )]
    #[case("https://example.com/appcast.xml", Provider::Unknown)]
    #[case("https://github.com/example/app/releases", Provider::Unknown)]
    #[case("", Provider::Unknown)]
    fn classify_by_locator_returns_expected(#[case] locator: &str, #[case] expected: Provider) {
        assert_eq!(classify_by_locator(locator), expected);
    }

    #[rstest]
    #[case(Provider::Unknown, "Unknown")]
    #[case(Provider::SparkleRssFeed, "Sparkle RSS Feed")]
    #[case(Provider::SourceForgeRssFeed, "SourceForge RSS Feed")]
    #[case(Provider::GitHubAtomFeed, "GitHub Atom Feed")]
    fn display_returns_dialect_name(#[case] provider: Provider, #[case] expected: &str) {
        assert_eq!(provider.to_string(), expected);
    }

    #[test]
    fn from_str_round_trips_identifiers() {
        for provider in [
            Provider::Unknown,
            Provider::SparkleRssFeed,
            Provider::SourceForgeRssFeed,
            Provider::GitHubAtomFeed,
        ] {
            assert_eq!(provider.as_str().parse::<Provider>(), Ok(provider));
        }
        assert_eq!("rss".parse::<Provider>(), Err(()));
    }
}
