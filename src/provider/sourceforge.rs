//! SourceForge project RSS feed provider
//!
//! Every item describes a single uploaded file, so each release carries at
//! most one download. The version is taken from the file path in the title.

use tracing::debug;

use crate::error::AppcastError;
use crate::provider::traits::{Appcaster, Channel, Unmarshaled, build_release};
use crate::provider::types::Provider;
use crate::provider::xml::{Element, parse_document};
use crate::release::{Download, Release, ReleaseError, extract_semantic_versions};

/// Appcaster for `https://sourceforge.net/projects/<name>/rss` feeds
pub struct SourceForgeAppcaster;

impl SourceForgeAppcaster {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SourceForgeAppcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Appcaster for SourceForgeAppcaster {
    fn provider(&self) -> Provider {
        Provider::SourceForgeRssFeed
    }

    fn unmarshal(&self, content: &[u8]) -> Result<Unmarshaled, AppcastError> {
        let document = parse_document(content).map_err(AppcastError::Syntax)?;

        let Some(channel) = document.child("rss").and_then(|rss| rss.child("channel")) else {
            debug!("SourceForge feed has no channel");
            return Ok(Unmarshaled::default());
        };

        let mut result = Unmarshaled {
            channel: Channel {
                title: channel.child_text("title").map(str::to_string),
                link: channel.child_text("link").map(str::to_string),
                description: channel.child_text("description").map(str::to_string),
                language: channel.child_text("language").map(str::to_string),
            },
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

/// First semantic version found in the title, then in the download link
fn resolve_version(item: &Element, url: Option<&str>) -> Option<String> {
    [item.child_text("title"), url]
        .into_iter()
        .flatten()
        .find_map(|text| extract_semantic_versions(text).into_iter().next())
}

fn parse_item(index: usize, item: &Element) -> Result<Release, ReleaseError> {
    let media = item.child("content");
    let url = media
        .and_then(|m| m.attr("url"))
        .or_else(|| item.child_text("link"));

    let version = resolve_version(item, url);
    let mut release = build_release(index, version.as_deref(), "")?
        .with_title(item.child_text("title").unwrap_or_default())
        .with_description(item.child_text("description").unwrap_or_default())
        .with_published(item.child_text("pubDate").unwrap_or_default());

    if let Some(url) = url {
        let (media_type, length) = media
            .map(|m| {
                (
                    m.attr("type").unwrap_or_default(),
                    m.attr("filesize")
                        .and_then(|l| l.parse().ok())
                        .unwrap_or(0),
                )
            })
            .unwrap_or_default();
        release = release.with_download(Download::new(url, media_type, length, None));
    }

    Ok(release)
}
