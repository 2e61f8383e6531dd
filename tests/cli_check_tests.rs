//! End-to-end tests for `lazykeys check`.

mod fixtures;
use fixtures::*;

use lazykeys::config::Config;

#[test]
fn test_check_valid_config() {
    let config = TempConfig::with_content(CUSTOM_CONFIG);
    let output = config.run(&["check"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Valid config should pass. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 shortcut(s) valid"));
    assert!(!stdout.contains("unreachable"));
}

#[test]
fn test_check_reports_shadowed_entry() {
    let config = TempConfig::with_content(SHADOWED_CONFIG);
    let output = config.run(&["check"]);

    // Warnings alone do not fail
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Entry #2 (N) is unreachable: entry #1"),
        "stdout: {stdout}"
    );
}

#[test]
fn test_check_strict_fails_on_warnings() {
    let config = TempConfig::with_content(SHADOWED_CONFIG);
    let output = config.run(&["check", "--strict"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("strict"), "stderr: {stderr}");
}

#[test]
fn test_check_invalid_entry() {
    let config = TempConfig::with_content(INVALID_CONFIG);
    let output = config.run(&["check"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Validation failed"));
}

#[test]
fn test_check_unknown_template_name() {
    let config = TempConfig::with_content("[[shortcuts]]\nname = \"warp_drive\"\n");
    let output = config.run(&["check"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warp_drive"), "stderr: {stderr}");
}

#[test]
fn test_check_missing_file_checks_defaults() {
    let config = TempConfig::empty();
    let output = config.run(&["check", "--strict"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lazykeys init"), "stdout: {stdout}");
    assert!(
        stdout.contains(&format!("{} shortcut(s) valid", Config::new().shortcuts.len())),
        "stdout: {stdout}"
    );
    assert!(!config.path.exists());
}
