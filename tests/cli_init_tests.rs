//! End-to-end tests for `lazykeys init`.

use std::fs;

mod fixtures;
use fixtures::*;

use lazykeys::config::Config;

#[test]
fn test_init_writes_default_config() {
    let config = TempConfig::empty();
    let output = config.run(&["init"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Init should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(config.path.exists());

    let loaded = Config::load_from(&config.path).expect("Written config should load");
    assert_eq!(loaded, Config::new());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let config = TempConfig::with_content(CUSTOM_CONFIG);
    let output = config.run(&["init"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--force"), "stderr: {stderr}");
    assert_eq!(fs::read_to_string(&config.path).unwrap(), CUSTOM_CONFIG);
}

#[test]
fn test_init_force_overwrites() {
    let config = TempConfig::with_content(CUSTOM_CONFIG);
    let output = config.run(&["init", "--force"]);

    assert_eq!(output.status.code(), Some(0));
    let loaded = Config::load_from(&config.path).unwrap();
    assert!(loaded.enabled);
    assert_eq!(loaded.shortcuts.len(), Config::new().shortcuts.len());
}

#[test]
fn test_init_then_check_passes() {
    let config = TempConfig::empty();
    assert_eq!(config.run(&["init"]).status.code(), Some(0));

    let output = config.run(&["check", "--strict"]);
    assert_eq!(output.status.code(), Some(0));
}
