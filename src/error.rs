use thiserror::Error;

use crate::provider::Provider;
use crate::release::ReleaseError;
use crate::source::SourceError;

#[derive(Debug, Error)]
pub enum AppcastError {
    /// No source was set, or the source holds no content
    #[error("no source")]
    NoSource,

    #[error("releases can't be unmarshaled from the \"{0}\" provider")]
    UnsupportedProvider(Provider),

    #[error("uncommenting is not available for the \"{0}\" provider")]
    UncommentUnavailable(Provider),

    /// The document itself is malformed; nothing was unmarshaled
    #[error("XML syntax error: {0}")]
    Syntax(String),

    #[error("no releases")]
    NoReleases,

    #[error(transparent)]
    Release(#[from] ReleaseError),

    #[error(transparent)]
    Source(#[from] SourceError),
}
