//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and file locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "LazyKeys";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "lazykeys";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "LazyKeys";

/// Shortcut configuration file name.
pub const CONFIG_FILE_NAME: &str = "shortcuts.toml";

/// Log file written while the terminal UI owns stdout.
pub const LOG_FILE_NAME: &str = "lazykeys.log";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "LAZYKEYS_CONFIG_DIR";
