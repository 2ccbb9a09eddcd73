//! Release model and the collection engine
//!
//! - [`version`]: semantic version parsing and extraction
//! - [`download`]: downloadable artifacts of a release
//! - [`record`]: the release value object and publish dates
//! - [`collection`]: original/working release sets with filter, sort and reset
//! - [`error`]: per-item validation errors

pub mod collection;
pub mod download;
pub mod error;
pub mod record;
pub mod version;

pub use collection::{ReleaseCollection, ReleaseFilter, SortOrder};
pub use download::Download;
pub use error::ReleaseError;
pub use record::Release;
pub use version::{VersionError, extract_semantic_versions, parse_version};
