use serde::Deserialize;
use std::path::PathBuf;

use crate::checksum::ChecksumAlgorithm;

/// Timeout for remote source requests in milliseconds (30 seconds)
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 30_000;

/// User agent sent by remote sources
pub const DEFAULT_USER_AGENT: &str = "appcast";

/// Appcast configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AppcastConfig {
    /// Algorithm used for the checksum generated when a source is loaded
    pub checksum: ChecksumAlgorithm,
    /// Strip comment delimiters before unmarshaling providers that support it
    pub uncomment_before_unmarshal: bool,
    pub remote: RemoteConfig,
    pub providers: ProvidersConfig,
}

/// Remote source configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoteConfig {
    pub user_agent: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: DEFAULT_REMOTE_TIMEOUT_MS,
        }
    }
}

/// Provider-specific configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ProvidersConfig {
    pub sparkle: ProviderConfig,
    pub sourceforge: ProviderConfig,
    pub github: ProviderConfig,
}

/// Individual provider configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProviderConfig {
    pub enabled: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Returns the path to the data directory for appcast.
/// Uses $XDG_DATA_HOME/appcast if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/appcast,
/// or ./appcast if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("appcast.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("appcast")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn appcast_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<AppcastConfig>(json!({
            "remote": {
                "timeoutMs": 1000
            }
        }))
        .unwrap();

        assert_eq!(result.remote.timeout_ms, 1000);
        assert_eq!(result.remote.user_agent, "appcast");
        assert_eq!(result.checksum, ChecksumAlgorithm::Sha256);
        assert!(!result.uncomment_before_unmarshal);
        assert_eq!(result.providers, ProvidersConfig::default());
    }

    #[test]
    fn appcast_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<AppcastConfig>(json!({
            "checksum": "sha256_homebrew_cask",
            "uncommentBeforeUnmarshal": true,
            "remote": {
                "userAgent": "example/1.0",
                "timeoutMs": 5000
            },
            "providers": {
                "sparkle": { "enabled": true },
                "sourceforge": { "enabled": false },
                "github": { "enabled": false }
            }
        }))
        .unwrap();

        assert_eq!(
            result,
            AppcastConfig {
                checksum: ChecksumAlgorithm::Sha256HomebrewCask,
                uncomment_before_unmarshal: true,
                remote: RemoteConfig {
                    user_agent: "example/1.0".to_string(),
                    timeout_ms: 5000,
                },
                providers: ProvidersConfig {
                    sparkle: ProviderConfig { enabled: true },
                    sourceforge: ProviderConfig { enabled: false },
                    github: ProviderConfig { enabled: false },
                }
            }
        );
    }

    #[test]
    fn appcast_config_rejects_unknown_checksum_algorithm() {
        let result = serde_json::from_value::<AppcastConfig>(json!({
            "checksum": "sha1"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/appcast"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/appcast"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./appcast"));
    }
}
