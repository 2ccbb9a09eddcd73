//! Sparkle RSS feed provider
//!
//! ```xml
//! <item>
//!   <title>Release 2.0.0</title>
//!   <pubDate>Fri, 13 May 2016 12:00:00 +0200</pubDate>
//!   <sparkle:minimumSystemVersion>10.10</sparkle:minimumSystemVersion>
//!   <enclosure url="https://example.com/app_2.0.0.dmg" sparkle:version="200"
//!              sparkle:shortVersionString="2.0.0" length="100000"
//!              type="application/octet-stream" sparkle:dsaSignature="..."/>
//! </item>
//! ```

use std::sync::LazyLock;

use regex::bytes::Regex;
use tracing::debug;

use crate::error::AppcastError;
use crate::provider::traits::{Appcaster, Channel, Unmarshaled, build_release};
use crate::provider::types::Provider;
use crate::provider::xml::{Element, parse_document};
use crate::release::{Download, Release, ReleaseError};

static COMMENT_DELIMITER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(<!--\s*)|(\s*-->)").expect("valid regex"));

/// Appcaster for feeds generated by the Sparkle framework
pub struct SparkleAppcaster;

impl SparkleAppcaster {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SparkleAppcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Appcaster for SparkleAppcaster {
    fn provider(&self) -> Provider {
        Provider::SparkleRssFeed
    }

    /// Strip `<!--` / `-->` tokens, keeping whatever they wrapped
    fn uncomment(&self, content: &[u8]) -> Result<Vec<u8>, AppcastError> {
        if content.is_empty() {
            return Err(AppcastError::NoSource);
        }

        Ok(COMMENT_DELIMITER_RE.replace_all(content, &b""[..]).into_owned())
    }

    fn unmarshal(&self, content: &[u8]) -> Result<Unmarshaled, AppcastError> {
        let document = parse_document(content).map_err(AppcastError::Syntax)?;

        let Some(channel) = document.child("rss").and_then(|rss| rss.child("channel")) else {
            debug!("Sparkle feed has no channel");
            return Ok(Unmarshaled::default());
        };

        let mut result = Unmarshaled {
            channel: parse_channel(channel),
            ..Unmarshaled::default()
        };

        for (i, item) in channel.children("item").enumerate() {
            match parse_item(i + 1, item) {
                Ok(release) => result.releases.push(release),
                Err(e) => result.errors.push(e),
            }
        }

        Ok(result)
    }
}

fn parse_channel(channel: &Element) -> Channel {
    Channel {
        title: channel.child_text("title").map(str::to_string),
        link: channel.child_text("link").map(str::to_string),
        description: channel.child_text("description").map(str::to_string),
        language: channel.child_text("language").map(str::to_string),
    }
}

/// Resolve version and build for an item
///
/// Enclosure attributes win over item elements. When only a build is present
/// it doubles as the version.
fn resolve_version(item: &Element) -> (Option<String>, String) {
    let enclosure_attr = |name: &str| item.children("enclosure").find_map(|e| e.attr(name));

    let short_version = enclosure_attr("shortVersionString")
        .or_else(|| item.child_text("shortVersionString"))
        .map(str::to_string);
    let build = enclosure_attr("version")
        .or_else(|| item.child_text("version"))
        .map(str::to_string);

    match (short_version, build) {
        (Some(version), build) => (Some(version), build.unwrap_or_default()),
        (None, Some(build)) => (Some(build.clone()), build),
        (None, None) => (None, String::new()),
    }
}

fn parse_item(index: usize, item: &Element) -> Result<Release, ReleaseError> {
    let (version, build) = resolve_version(item);
    let mut release = build_release(index, version.as_deref(), &build)?
        .with_title(item.child_text("title").unwrap_or_default())
        .with_description(item.child_text("description").unwrap_or_default())
        .with_release_notes_link(item.child_text("releaseNotesLink").unwrap_or_default())
        .with_minimum_system_version(item.child_text("minimumSystemVersion").unwrap_or_default())
        .with_published(item.child_text("pubDate").unwrap_or_default())
        .with_prerelease_flag(item.child_text("channel").is_some());

    for enclosure in item.children("enclosure") {
        let Some(url) = enclosure.attr("url") else {
            continue;
        };
        let signature = enclosure
            .attr("dsaSignature")
            .or_else(|| enclosure.attr("edSignature"))
            .map(str::to_string);
        release = release.with_download(Download::new(
            url,
            enclosure.attr("type").unwrap_or_default(),
            enclosure
                .attr("length")
                .and_then(|l| l.parse().ok())
                .unwrap_or(0),
            signature,
        ));
    }

    Ok(release)
}
