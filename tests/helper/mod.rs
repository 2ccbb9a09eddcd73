//! Fixture test utilities

#![allow(dead_code)]

use std::path::PathBuf;

use async_trait::async_trait;

use appcast::{Appcast, AppcastConfig, AppcastError, Source, SourceError};

/// Path of a feed under `tests/fixtures/<provider>/`
pub fn fixture_path(provider: &str, name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(provider)
        .join(name)
}

pub fn fixture(provider: &str, name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(provider, name)).unwrap()
}

/// Source serving fixed content under an arbitrary locator
pub struct StaticSource {
    locator: String,
    content: Vec<u8>,
}

impl StaticSource {
    pub fn new(locator: &str, content: Vec<u8>) -> Self {
        Self {
            locator: locator.to_string(),
            content,
        }
    }
}

#[async_trait]
impl Source for StaticSource {
    fn locator(&self) -> String {
        self.locator.clone()
    }

    async fn load(&self) -> Result<Vec<u8>, SourceError> {
        Ok(self.content.clone())
    }
}

/// Load and unmarshal a fixture file with the given config
pub async fn load_fixture(
    config: AppcastConfig,
    provider: &str,
    name: &str,
) -> (Appcast, Result<(), Vec<AppcastError>>) {
    let mut appcast = Appcast::new(config);
    let result = appcast
        .load_from_local_source(fixture_path(provider, name))
        .await;
    (appcast, result)
}

pub fn error_messages(errors: &[AppcastError]) -> Vec<String> {
    errors.iter().map(|e| e.to_string()).collect()
}

pub fn versions(appcast: &Appcast) -> Vec<String> {
    appcast
        .releases()
        .releases()
        .iter()
        .map(|r| r.version().to_string())
        .collect()
}
