//! Log file output

use tempfile::TempDir;

use appcast::logging::{self, LogFormat};

#[test]
fn init_writes_json_lines_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("logs").join("appcast.log");

    let guard = logging::init(&path, LogFormat::Json).unwrap();
    tracing::warn!(provider = "sparkle_rss_feed", "Skipping release without version");
    drop(guard);

    let content = std::fs::read_to_string(&path).unwrap();
    let line = content
        .lines()
        .find(|l| l.contains("Skipping release without version"))
        .unwrap();
    let event: serde_json::Value = serde_json::from_str(line).unwrap();

    assert_eq!(event["level"], "WARN");
    assert_eq!(
        event["fields"]["message"],
        "Skipping release without version"
    );
    assert_eq!(event["fields"]["provider"], "sparkle_rss_feed");

    assert!(logging::init(&path, LogFormat::Text).is_err());
}
