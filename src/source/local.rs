//! Feed stored on the local filesystem

use std::path::PathBuf;

use tracing::debug;

use crate::source::{Source, SourceError};

pub struct LocalSource {
    path: PathBuf,
}

impl LocalSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl Source for LocalSource {
    fn locator(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Vec<u8>, SourceError> {
        let content = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), bytes = content.len(), "Loaded local source");
        Ok(content)
    }
}
