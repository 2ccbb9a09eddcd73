//! Provider layer
//! - types.rs: Provider tag and content/locator classifiers
//! - traits.rs: Appcaster trait, Channel and Unmarshaled
//! - xml.rs: Element tree shared by every provider
//! - sparkle.rs: Sparkle RSS feed provider
//! - sourceforge.rs: SourceForge RSS feed provider
//! - github.rs: GitHub releases Atom feed provider

pub mod github;
pub mod sourceforge;
pub mod sparkle;
pub mod traits;
pub mod types;
pub(crate) mod xml;

pub use github::GitHubAppcaster;
pub use sourceforge::SourceForgeAppcaster;
pub use sparkle::SparkleAppcaster;
pub use traits::{Appcaster, Channel, Unmarshaled};
pub use types::{Provider, classify_by_content, classify_by_locator};
