use thiserror::Error;

/// Per-item validation failure raised while unmarshaling a feed
///
/// `index` is the 1-based position of the item in the document. These
/// errors never stop the remaining items from being processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReleaseError {
    #[error("release #{index}: no version")]
    NoVersion { index: usize },

    #[error("release #{index}: malformed version: {value}")]
    MalformedVersion { index: usize, value: String },
}

impl ReleaseError {
    /// 1-based position of the offending item
    pub fn index(&self) -> usize {
        match self {
            ReleaseError::NoVersion { index } | ReleaseError::MalformedVersion { index, .. } => {
                *index
            }
        }
    }
}
