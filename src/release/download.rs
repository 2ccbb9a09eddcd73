/// A downloadable artifact of a release
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Download {
    url: String,
    media_type: String,
    length: u64,
    signature: Option<String>,
}

impl Download {
    pub fn new(
        url: impl Into<String>,
        media_type: impl Into<String>,
        length: u64,
        signature: Option<String>,
    ) -> Self {
        Self {
            url: url.into(),
            media_type: media_type.into(),
            length,
            signature,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// MIME type announced by the feed (e.g. `application/octet-stream`)
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Size in bytes, 0 when the feed doesn't announce one
    pub fn length(&self) -> u64 {
        self.length
    }

    /// DSA or EdDSA signature published alongside the artifact
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }
}
