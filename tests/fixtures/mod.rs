//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the lazykeys binary
pub fn lazykeys_bin() -> &'static str {
    env!("CARGO_BIN_EXE_lazykeys")
}

/// A temporary config directory with a `shortcuts.toml` path inside it.
pub struct TempConfig {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TempConfig {
    /// An empty directory; the config file does not exist yet.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("shortcuts.toml");
        Self { dir, path }
    }

    /// A directory whose config file holds `content`.
    pub fn with_content(content: &str) -> Self {
        let config = Self::empty();
        fs::write(&config.path, content).expect("Failed to write config");
        config
    }

    /// Run the binary against this config.
    pub fn run(&self, args: &[&str]) -> Output {
        run_with_config(&self.path, self.dir.path(), args)
    }
}

/// Run the binary with `--config` and an isolated config directory.
pub fn run_with_config(config: &Path, config_dir: &Path, args: &[&str]) -> Output {
    Command::new(lazykeys_bin())
        .env("LAZYKEYS_CONFIG_DIR", config_dir)
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Config with two entries binding the same plain `n`.
pub const SHADOWED_CONFIG: &str = r#"
[[shortcuts]]
name = "new_item"

[[shortcuts]]
key = "N"
action = "open_notes"
description = "Open notes"
"#;

/// Config with a custom entry that has no key.
pub const INVALID_CONFIG: &str = r#"
[[shortcuts]]
shift = true
action = "orphan"
"#;

/// Small valid config mixing a template and a custom binding.
pub const CUSTOM_CONFIG: &str = r#"
enabled = false

[[shortcuts]]
name = "search"

[[shortcuts]]
key = "g"
shift = true
action = "go_bottom"
description = "Jump to bottom"
"#;
