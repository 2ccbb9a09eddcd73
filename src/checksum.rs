//! Content checksums

use std::fmt;
use std::sync::LazyLock;

use md5::Md5;
use regex::bytes::Regex;
use serde::Deserialize;
use sha2::{Digest, Sha256};

static PUB_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<pubDate>[^<]*</pubDate>").expect("valid regex"));

/// Supported checksum algorithms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecksumAlgorithm {
    Md5,
    #[default]
    Sha256,
    /// SHA-256 over the content with every `<pubDate>` element removed, so a
    /// regenerated feed whose only change is its dates keeps the same identity
    Sha256HomebrewCask,
}

impl ChecksumAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecksumAlgorithm::Md5 => "md5",
            ChecksumAlgorithm::Sha256 => "sha256",
            ChecksumAlgorithm::Sha256HomebrewCask => "sha256_homebrew_cask",
        }
    }
}

/// Compute the hex digest of `source` with the given algorithm
pub fn digest(algorithm: ChecksumAlgorithm, source: &[u8]) -> String {
    match algorithm {
        ChecksumAlgorithm::Md5 => format!("{:x}", Md5::digest(source)),
        ChecksumAlgorithm::Sha256 => format!("{:x}", Sha256::digest(source)),
        ChecksumAlgorithm::Sha256HomebrewCask => {
            let normalized = PUB_DATE_RE.replace_all(source, &b""[..]);
            format!("{:x}", Sha256::digest(&normalized))
        }
    }
}

/// A digest together with the exact bytes it was computed from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksum {
    algorithm: ChecksumAlgorithm,
    source: Vec<u8>,
    result: String,
}

impl Checksum {
    pub fn new(algorithm: ChecksumAlgorithm, source: &[u8]) -> Self {
        Self {
            algorithm,
            source: source.to_vec(),
            result: digest(algorithm, source),
        }
    }

    pub fn algorithm(&self) -> ChecksumAlgorithm {
        self.algorithm
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }

    /// Hex encoded digest
    pub fn result(&self) -> &str {
        &self.result
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.result)
    }
}
