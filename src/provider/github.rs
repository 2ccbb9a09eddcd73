//! GitHub releases Atom feed provider
//!
//! ```xml
//! <entry>
//!   <id>tag:github.com,2008:Repository/123456/v2.0.0</id>
//!   <updated>2016-05-13T12:00:00+02:00</updated>
//!   <link rel="alternate" type="text/html" href="https://github.com/user/repo/releases/tag/v2.0.0"/>
//!   <title>2.0.0</title>
//!   <content type="html">...</content>
//! </entry>
//! ```
//!
//! The feed lists tags, not assets, so releases never carry downloads.

use tracing::debug;

use crate::error::AppcastError;
use crate::provider::traits::{Appcaster, Channel, Unmarshaled, build_release};
use crate::provider::types::Provider;
use crate::provider::xml::{Element, parse_document};
use crate::release::{Release, ReleaseError};

/// Appcaster for `https://github.com/<user>/<repo>/releases.atom` feeds
pub struct GitHubAppcaster;

impl GitHubAppcaster {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GitHubAppcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Appcaster for GitHubAppcaster {
    fn provider(&self) -> Provider {
        Provider::GitHubAtomFeed
    }

    fn unmarshal(&self, content: &[u8]) -> Result<Unmarshaled, AppcastError> {
        let document = parse_document(content).map_err(AppcastError::Syntax)?;

        let Some(feed) = document.child("feed") else {
            debug!("GitHub feed has no feed element");
            return Ok(Unmarshaled::default());
        };

        let mut result = Unmarshaled {
            channel: Channel {
                title: feed.child_text("title").map(str::to_string),
                link: alternate_link(feed).map(str::to_string),
                description: feed.child_text("subtitle").map(str::to_string),
                language: feed.attr("lang").map(str::to_string),
            },
            ..Unmarshaled::default()
        };

        for (i, entry) in feed.children("entry").enumerate() {
            match parse_entry(i + 1, entry) {
                Ok(release) => result.releases.push(release),
                Err(e) => result.errors.push(e),
            }
        }

        Ok(result)
    }
}

/// `href` of the first `rel="alternate"` link, or of a link without `rel`
fn alternate_link(element: &Element) -> Option<&str> {
    element
        .children("link")
        .find(|l| matches!(l.attr("rel"), None | Some("alternate")))
        .and_then(|l| l.attr("href"))
}

fn last_segment(value: &str) -> Option<&str> {
    value
        .rsplit('/')
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Tag name from the entry id, then from the release link, then the title
fn resolve_version(entry: &Element) -> Option<&str> {
    entry
        .child_text("id")
        .and_then(last_segment)
        .or_else(|| alternate_link(entry).and_then(last_segment))
        .or_else(|| entry.child_text("title"))
}

fn parse_entry(index: usize, entry: &Element) -> Result<Release, ReleaseError> {
    let version = resolve_version(entry);
    let release = build_release(index, version, version.unwrap_or_default())?
        .with_title(entry.child_text("title").unwrap_or_default())
        .with_description(entry.child_text("content").unwrap_or_default())
        .with_release_notes_link(alternate_link(entry).unwrap_or_default())
        .with_published(entry.child_text("updated").unwrap_or_default());

    Ok(release)
}
