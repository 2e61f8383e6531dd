//! End-to-end tests for `lazykeys list`.

mod fixtures;
use fixtures::*;

#[test]
fn test_list_defaults_when_no_file() {
    let config = TempConfig::empty();
    let output = config.run(&["list"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Listing defaults should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Ctrl/Cmd+K"), "Should list search shortcut");
    assert!(stdout.contains("Esc"), "Should list close shortcut");
    assert!(stdout.contains("toggle_help"));
    assert!(!stdout.contains("disabled"));
}

#[test]
fn test_list_preserves_order() {
    let config = TempConfig::with_content(CUSTOM_CONFIG);
    let output = config.run(&["list"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("(shortcuts disabled)"));

    let search = stdout.find("search").expect("search listed");
    let bottom = stdout.find("go_bottom").expect("custom entry listed");
    assert!(search < bottom, "Entries should appear in file order");
}

#[test]
fn test_list_json() {
    let config = TempConfig::with_content(CUSTOM_CONFIG);
    let output = config.run(&["list", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");

    assert_eq!(json["enabled"], false);
    let shortcuts = json["shortcuts"].as_array().expect("shortcuts array");
    assert_eq!(shortcuts.len(), 2);

    assert_eq!(shortcuts[0]["action"], "search");
    assert_eq!(shortcuts[0]["ctrl_or_meta"], true);
    assert_eq!(shortcuts[1]["label"], "Shift+G");
    assert_eq!(shortcuts[1]["description"], "Jump to bottom");
}

#[test]
fn test_list_invalid_config_fails() {
    let config = TempConfig::with_content(INVALID_CONFIG);
    let output = config.run(&["list"]);

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"), "stderr: {stderr}");
}
