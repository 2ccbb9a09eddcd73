//! Appcast coordinator
//!
//! Owns the loaded source and routes it to the [`Appcaster`] registered for
//! its provider. The unmarshaled releases stay on the `Appcast` so callers can
//! filter, sort and reset them in place.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::checksum::{Checksum, ChecksumAlgorithm};
use crate::config::{AppcastConfig, ProvidersConfig};
use crate::error::AppcastError;
use crate::provider::{
    Appcaster, Channel, GitHubAppcaster, Provider, SourceForgeAppcaster, SparkleAppcaster,
    classify_by_content, classify_by_locator,
};
use crate::release::{Release, ReleaseCollection};
use crate::source::{LoadedSource, LocalSource, RemoteSource, Source};

/// Create the appcasters for every provider enabled in `config`
pub fn create_default_appcasters(
    config: &ProvidersConfig,
) -> HashMap<Provider, Arc<dyn Appcaster>> {
    let mut appcasters: HashMap<Provider, Arc<dyn Appcaster>> = HashMap::new();

    if config.sparkle.enabled {
        appcasters.insert(Provider::SparkleRssFeed, Arc::new(SparkleAppcaster::new()));
    }
    if config.sourceforge.enabled {
        appcasters.insert(
            Provider::SourceForgeRssFeed,
            Arc::new(SourceForgeAppcaster::new()),
        );
    }
    if config.github.enabled {
        appcasters.insert(Provider::GitHubAtomFeed, Arc::new(GitHubAppcaster::new()));
    }

    appcasters
}

/// Classify content, falling back to the locator when the content is
/// unrecognized
pub fn classify(content: &[u8], locator: &str) -> Provider {
    match classify_by_content(content) {
        Provider::Unknown => classify_by_locator(locator),
        provider => provider,
    }
}

pub struct Appcast {
    config: AppcastConfig,
    appcasters: HashMap<Provider, Arc<dyn Appcaster>>,
    source: Option<LoadedSource>,
    channel: Channel,
    releases: ReleaseCollection,
}

impl Appcast {
    pub fn new(config: AppcastConfig) -> Self {
        let appcasters = create_default_appcasters(&config.providers);
        Self {
            config,
            appcasters,
            source: None,
            channel: Channel::default(),
            releases: ReleaseCollection::default(),
        }
    }

    /// Create an appcast around content that is already in memory
    pub fn with_source(config: AppcastConfig, source: LoadedSource) -> Self {
        let mut appcast = Self::new(config);
        appcast.set_source(source);
        appcast
    }

    pub fn config(&self) -> &AppcastConfig {
        &self.config
    }

    pub fn source(&self) -> Option<&LoadedSource> {
        self.source.as_ref()
    }

    /// Replace the source and discard anything unmarshaled from the previous one
    pub fn set_source(&mut self, source: LoadedSource) {
        self.source = Some(source);
        self.channel = Channel::default();
        self.releases = ReleaseCollection::default();
    }

    /// Provider of the current source, `Unknown` without one
    pub fn provider(&self) -> Provider {
        self.source
            .as_ref()
            .map(LoadedSource::provider)
            .unwrap_or_default()
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn releases(&self) -> &ReleaseCollection {
        &self.releases
    }

    pub fn releases_mut(&mut self) -> &mut ReleaseCollection {
        &mut self.releases
    }

    /// First release of the working view
    pub fn first_release(&self) -> Result<&Release, AppcastError> {
        self.releases.first_release().ok_or(AppcastError::NoReleases)
    }

    /// Load content from `source`, classify it and generate its checksum
    ///
    /// Nothing is unmarshaled yet.
    pub async fn load(&mut self, source: &dyn Source) -> Result<(), AppcastError> {
        let locator = source.locator();
        let content = source.load().await?;

        let mut loaded = LoadedSource::new(locator, content);
        let provider = classify(loaded.content(), loaded.locator());
        loaded.set_provider(provider);
        loaded.generate_checksum(self.config.checksum);

        info!(
            locator = %loaded.locator(),
            provider = provider.as_str(),
            bytes = loaded.content().len(),
            "Loaded source"
        );
        self.set_source(loaded);

        Ok(())
    }

    /// Load a feed file and unmarshal it
    pub async fn load_from_local_source(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<(), Vec<AppcastError>> {
        let source = LocalSource::new(path.as_ref());
        self.load(&source).await.map_err(|e| vec![e])?;
        self.unmarshal()
    }

    /// Fetch a feed over HTTP and unmarshal it
    pub async fn load_from_remote_source(&mut self, url: &str) -> Result<(), Vec<AppcastError>> {
        let source = RemoteSource::new(url, &self.config.remote)
            .map_err(|e| vec![AppcastError::from(e)])?;
        self.load(&source).await.map_err(|e| vec![e])?;
        self.unmarshal()
    }

    fn appcaster(&self, provider: Provider) -> Result<Arc<dyn Appcaster>, AppcastError> {
        self.appcasters
            .get(&provider)
            .cloned()
            .ok_or(AppcastError::UnsupportedProvider(provider))
    }

    fn source_with_content(&self) -> Result<&LoadedSource, AppcastError> {
        self.source
            .as_ref()
            .filter(|s| !s.content().is_empty())
            .ok_or(AppcastError::NoSource)
    }

    /// Strip comment delimiters from the source content in place
    pub fn uncomment(&mut self) -> Result<(), AppcastError> {
        let source = self.source_with_content()?;
        let appcaster = self.appcaster(source.provider())?;
        let content = appcaster.uncomment(source.content())?;

        debug!(provider = appcaster.provider().as_str(), "Uncommented source");
        if let Some(source) = self.source.as_mut() {
            source.set_content(content);
        }

        Ok(())
    }

    /// Compute the checksum of the current source content
    pub fn generate_checksum(
        &mut self,
        algorithm: ChecksumAlgorithm,
    ) -> Result<&Checksum, AppcastError> {
        let source = self.source.as_mut().ok_or(AppcastError::NoSource)?;
        Ok(source.generate_checksum(algorithm))
    }

    /// Unmarshal the source into the release collection
    ///
    /// Item errors don't stop the scan: the collection holds every valid
    /// release and the errors are returned. A syntax error leaves the
    /// collection empty.
    pub fn unmarshal(&mut self) -> Result<(), Vec<AppcastError>> {
        self.channel = Channel::default();
        self.releases = ReleaseCollection::default();

        let source = self.source_with_content().map_err(|e| vec![e])?;
        let appcaster = self.appcaster(source.provider()).map_err(|e| vec![e])?;

        let uncommented = if self.config.uncomment_before_unmarshal {
            match appcaster.uncomment(source.content()) {
                Ok(content) => Some(content),
                Err(e) => {
                    debug!(error = %e, "Unmarshaling without uncommenting");
                    None
                }
            }
        } else {
            None
        };
        let content = uncommented.as_deref().unwrap_or(source.content());

        let unmarshaled = appcaster.unmarshal(content).map_err(|e| {
            warn!(provider = appcaster.provider().as_str(), error = %e, "Failed to unmarshal");
            vec![e]
        })?;

        info!(
            provider = appcaster.provider().as_str(),
            releases = unmarshaled.releases.len(),
            errors = unmarshaled.errors.len(),
            "Unmarshaled releases"
        );

        self.channel = unmarshaled.channel;
        self.releases = ReleaseCollection::new(unmarshaled.releases);

        if unmarshaled.errors.is_empty() {
            Ok(())
        } else {
            Err(unmarshaled
                .errors
                .into_iter()
                .map(AppcastError::from)
                .collect())
        }
    }
}

impl Default for Appcast {
    fn default() -> Self {
        Self::new(AppcastConfig::default())
    }
}
