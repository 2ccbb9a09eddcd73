//! Classify software-update feeds and normalize them into releases
//!
//! Supported dialects are Sparkle RSS feeds, SourceForge project RSS feeds
//! and GitHub releases Atom feeds.
//!
//! ```no_run
//! use appcast::{Appcast, AppcastConfig, ReleaseFilter, SortOrder};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut appcast = Appcast::new(AppcastConfig::default());
//! if let Err(errors) = appcast
//!     .load_from_remote_source("https://example.com/appcast.xml")
//!     .await
//! {
//!     for e in &errors {
//!         eprintln!("{}", e);
//!     }
//! }
//!
//! let releases = appcast.releases_mut();
//! releases.keep_not_matching(&ReleaseFilter::Prerelease);
//! releases.sort_by_version(SortOrder::Descending);
//!
//! let latest = appcast.first_release()?;
//! println!("{} {:?}", latest.version(), latest.downloads().first().map(|d| d.url()));
//! # Ok(())
//! # }
//! ```

pub mod appcast;
pub mod checksum;
pub mod config;
pub mod error;
pub mod logging;
pub mod provider;
pub mod release;
pub mod source;

pub use appcast::Appcast;
pub use checksum::{Checksum, ChecksumAlgorithm};
pub use config::AppcastConfig;
pub use error::AppcastError;
pub use provider::{Channel, Provider};
pub use release::{Download, Release, ReleaseCollection, ReleaseError, ReleaseFilter, SortOrder};
pub use source::{LoadedSource, LocalSource, RemoteSource, Source, SourceError};
