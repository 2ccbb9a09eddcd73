//! Source layer
//! - mod.rs: Source trait, SourceError and LoadedSource
//! - local.rs: feed read from a file
//! - remote.rs: feed fetched over HTTP

pub mod local;
pub mod remote;

use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::checksum::{Checksum, ChecksumAlgorithm};
use crate::provider::Provider;

pub use local::LocalSource;
pub use remote::RemoteSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Trait for acquiring raw feed bytes
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    /// File path or URL the content comes from
    fn locator(&self) -> String;

    /// Fetches the whole feed
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - Raw feed content
    /// * `Err(SourceError)` - If the content can't be acquired
    async fn load(&self) -> Result<Vec<u8>, SourceError>;
}

/// Content acquired from a [`Source`], with what has been learned about it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedSource {
    locator: String,
    content: Vec<u8>,
    provider: Provider,
    checksum: Option<Checksum>,
}

impl LoadedSource {
    pub fn new(locator: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            locator: locator.into(),
            content,
            ..Self::default()
        }
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Replace the content; a checksum generated earlier keeps describing the
    /// bytes it was computed from
    pub fn set_content(&mut self, content: Vec<u8>) {
        self.content = content;
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn set_provider(&mut self, provider: Provider) {
        self.provider = provider;
    }

    pub fn checksum(&self) -> Option<&Checksum> {
        self.checksum.as_ref()
    }

    /// Compute and store a checksum over the current content
    pub fn generate_checksum(&mut self, algorithm: ChecksumAlgorithm) -> &Checksum {
        self.checksum.insert(Checksum::new(algorithm, &self.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loaded_source_starts_unclassified_without_checksum() {
        let source = LoadedSource::new("feed.xml", b"<rss/>".to_vec());

        assert_eq!(source.locator(), "feed.xml");
        assert_eq!(source.content(), b"<rss/>");
        assert_eq!(source.provider(), Provider::Unknown);
        assert!(source.checksum().is_none());
    }

    #[test]
    fn generate_checksum_is_stable_across_calls() {
        let mut source = LoadedSource::new("feed.xml", b"test".to_vec());

        let first = source.generate_checksum(ChecksumAlgorithm::Sha256).clone();
        let second = source.generate_checksum(ChecksumAlgorithm::Sha256).clone();

        assert_eq!(first, second);
        assert_eq!(
            first.result(),
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
    }

    #[test]
    fn set_content_keeps_previous_checksum_source() {
        let mut source = LoadedSource::new("feed.xml", b"test".to_vec());
        source.generate_checksum(ChecksumAlgorithm::Md5);

        source.set_content(b"changed".to_vec());

        assert_eq!(source.content(), b"changed");
        assert_eq!(source.checksum().map(|c| c.source()), Some(&b"test"[..]));
    }
}
