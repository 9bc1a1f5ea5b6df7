//! Configuration tests
//!
//! Covers defaults, TOML round-trips, and environment overrides.

use bankmetrics::config::AppConfig;

#[test]
fn test_default_config() {
    let config = AppConfig::default();

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "full");
    assert!(config.logging.file.is_none());
    assert_eq!(config.logging.max_backups, 7);
    assert!(config.logging.enable_rotation);

    assert!(config.metrics.enabled);
    assert_eq!(config.metrics.update_interval, 15);
}

#[test]
fn test_generate_sample_config() {
    let sample = AppConfig::generate_sample_config();

    assert!(sample.contains("[logging]"));
    assert!(sample.contains("[metrics]"));
    assert!(sample.contains("level = \"info\""));
    assert!(sample.contains("update_interval = 15"));
}

#[test]
fn test_config_roundtrip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = AppConfig::default();
    config.logging.level = "debug".to_string();
    config.metrics.update_interval = 60;
    config.save_to_file(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let reloaded: AppConfig = toml::from_str(&content).unwrap();

    assert_eq!(reloaded.logging.level, "debug");
    assert_eq!(reloaded.metrics.update_interval, 60);
    // Untouched fields keep their defaults
    assert_eq!(reloaded.logging.max_backups, 7);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config: AppConfig = toml::from_str(
        r#"
        [metrics]
        update_interval = 30
        "#,
    )
    .unwrap();

    assert_eq!(config.metrics.update_interval, 30);
    assert!(config.metrics.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_env_override() {
    // SAFETY: test-local env mutation; no other test in this binary reads
    // the loader
    unsafe {
        std::env::set_var("BM__LOGGING__LEVEL", "trace");
        std::env::set_var("BM__METRICS__UPDATE_INTERVAL", "5");
    }

    let config = AppConfig::load();
    assert_eq!(config.logging.level, "trace");
    assert_eq!(config.metrics.update_interval, 5);

    unsafe {
        std::env::remove_var("BM__LOGGING__LEVEL");
        std::env::remove_var("BM__METRICS__UPDATE_INTERVAL");
    }
}
