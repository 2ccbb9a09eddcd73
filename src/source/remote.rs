//! Feed fetched over HTTP

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::RemoteConfig;
use crate::source::{Source, SourceError};

pub struct RemoteSource {
    client: reqwest::Client,
    url: String,
}

impl RemoteSource {
    /// Creates a new RemoteSource with the client settings from `config`
    pub fn new(url: &str, config: &RemoteConfig) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl Source for RemoteSource {
    fn locator(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> Result<Vec<u8>, SourceError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();

        if !status.is_success() {
            warn!("Remote source returned status {}: {}", status, self.url);
            return Err(SourceError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let content = response.bytes().await?.to_vec();
        debug!(url = %self.url, bytes = content.len(), "Loaded remote source");

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn load_returns_response_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/appcast.xml")
            .match_header("user-agent", "appcast")
            .with_status(200)
            .with_header("content-type", "application/xml")
            .with_body("<rss version=\"2.0\"></rss>")
            .create_async()
            .await;

        let url = format!("{}/appcast.xml", server.url());
        let source = RemoteSource::new(&url, &RemoteConfig::default()).unwrap();
        let content = source.load().await.unwrap();

        mock.assert_async().await;
        assert_eq!(content, b"<rss version=\"2.0\"></rss>");
        assert_eq!(source.locator(), url);
    }

    #[tokio::test]
    async fn load_sends_configured_user_agent() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/appcast.xml")
            .match_header("user-agent", "example/1.0")
            .with_status(200)
            .with_body("<rss/>")
            .create_async()
            .await;

        let config = RemoteConfig {
            user_agent: "example/1.0".to_string(),
            ..RemoteConfig::default()
        };
        let source = RemoteSource::new(&format!("{}/appcast.xml", server.url()), &config).unwrap();
        source.load().await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn load_reports_unsuccessful_status() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("GET", "/missing.xml")
            .with_status(404)
            .create_async()
            .await;

        let source = RemoteSource::new(
            &format!("{}/missing.xml", server.url()),
            &RemoteConfig::default(),
        )
        .unwrap();
        let err = source.load().await.unwrap_err();

        assert!(matches!(err, SourceError::HttpStatus { status: 404, .. }));
    }
}
