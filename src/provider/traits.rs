//! Per-provider capability contract

use crate::error::AppcastError;
use crate::provider::types::Provider;
use crate::release::{Release, ReleaseError};

/// Feed-level metadata, kept apart from the releases
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Channel {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
}

/// Outcome of a structurally valid unmarshal
///
/// `errors` holds the items that were skipped; every other item is in
/// `releases`, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Unmarshaled {
    pub channel: Channel,
    pub releases: Vec<Release>,
    pub errors: Vec<ReleaseError>,
}

/// Trait implemented once per feed dialect
pub trait Appcaster: Send + Sync {
    /// Returns the provider this implementation handles
    fn provider(&self) -> Provider;

    /// Remove comment delimiters wrapping disabled entries
    ///
    /// Not every dialect supports this; the default reports it as unavailable.
    fn uncomment(&self, _content: &[u8]) -> Result<Vec<u8>, AppcastError> {
        Err(AppcastError::UncommentUnavailable(self.provider()))
    }

    /// Convert raw feed content into releases
    ///
    /// Returns [`AppcastError::Syntax`] when the document is malformed. Item
    /// level problems are collected in [`Unmarshaled::errors`] instead.
    fn unmarshal(&self, content: &[u8]) -> Result<Unmarshaled, AppcastError>;
}

/// Create the release for the item at 1-based `index`
///
/// A missing or unparsable version becomes the item's [`ReleaseError`].
pub(crate) fn build_release(
    index: usize,
    version: Option<&str>,
    build: &str,
) -> Result<Release, ReleaseError> {
    let Some(version) = version else {
        tracing::warn!(index, "Skipping release without version");
        return Err(ReleaseError::NoVersion { index });
    };

    Release::new(version, build).map_err(|e| {
        tracing::warn!(index, error = %e, "Skipping release with malformed version");
        ReleaseError::MalformedVersion {
            index,
            value: version.to_string(),
        }
    })
}
