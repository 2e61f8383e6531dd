//! Shortcut configuration file.
//!
//! This module handles loading, validating, and saving the shortcut set in
//! TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV, CONFIG_FILE_NAME};
use crate::dispatcher::{ActionFn, DispatcherConfig, ShortcutDefinition};
use crate::shortcuts::ShortcutName;

/// One `[[shortcuts]]` entry.
///
/// `name` pulls in a predefined template; every other field overrides it.
/// Entries without a name must at least give a `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShortcutEntry {
    /// Predefined template to start from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<ShortcutName>,
    /// Key identifier (e.g. "k", "Escape", "F5")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Ctrl or meta must be held
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctrl_or_meta: Option<bool>,
    /// Shift must be held
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<bool>,
    /// Action id handed to the host (defaults to the template name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Display text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A fully resolved entry with all template defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedShortcut {
    /// Key identifier
    pub key: String,
    /// Ctrl or meta must be held
    pub ctrl_or_meta: bool,
    /// Shift must be held
    pub shift: bool,
    /// Action id
    pub action: String,
    /// Display text
    pub description: String,
}

impl ResolvedShortcut {
    /// Human-readable key combination.
    #[must_use]
    pub fn label(&self) -> String {
        ShortcutDefinition::new(self.key.clone(), self.description.clone(), || {})
            .with_ctrl_or_meta(self.ctrl_or_meta)
            .with_shift(self.shift)
            .label()
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.key.to_lowercase() == other.key.to_lowercase()
            && self.ctrl_or_meta == other.ctrl_or_meta
            && self.shift == other.shift
    }
}

impl ShortcutEntry {
    /// Entry that uses a template unchanged.
    #[must_use]
    pub fn named(name: ShortcutName) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }

    /// Apply template defaults and overrides.
    pub fn resolve(&self) -> Result<ResolvedShortcut> {
        let template = self.name.map(|name| name.template());

        let key = self
            .key
            .clone()
            .or_else(|| template.map(|t| t.key.to_string()))
            .context("Shortcut entry needs either `name` or `key`")?;
        if key.is_empty() {
            anyhow::bail!("Shortcut entry has an empty key");
        }

        let action = self
            .action
            .clone()
            .or_else(|| self.name.map(|name| name.id().to_string()))
            .context(format!("Shortcut `{key}` has no `action` and no `name`"))?;
        if action.trim().is_empty() {
            anyhow::bail!("Shortcut `{key}` has an empty action id");
        }

        let description = self
            .description
            .clone()
            .or_else(|| template.map(|t| t.description.to_string()))
            .unwrap_or_else(|| action.clone());

        Ok(ResolvedShortcut {
            ctrl_or_meta: self
                .ctrl_or_meta
                .or_else(|| template.map(|t| t.ctrl_or_meta))
                .unwrap_or(false),
            shift: self
                .shift
                .or_else(|| template.map(|t| t.shift))
                .unwrap_or(false),
            key,
            action,
            description,
        })
    }
}

/// A later entry that can never fire because an earlier one takes its keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadowedShortcut {
    /// Position of the unreachable entry
    pub index: usize,
    /// Position of the entry that wins
    pub shadowed_by: usize,
    /// Key combination both share
    pub label: String,
}

fn default_enabled() -> bool {
    true
}

/// Shortcut configuration.
///
/// # File Location
///
/// - Linux: `~/.config/LazyKeys/shortcuts.toml`
/// - macOS: `~/Library/Application Support/LazyKeys/shortcuts.toml`
/// - Windows: `%APPDATA%\LazyKeys\shortcuts.toml`
///
/// The directory can be overridden with the `LAZYKEYS_CONFIG_DIR` environment
/// variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Whether shortcuts are active at startup
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Entries in priority order
    #[serde(default)]
    pub shortcuts: Vec<ShortcutEntry>,
}

impl Config {
    /// Creates a config containing every predefined shortcut.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            shortcuts: ShortcutName::ALL
                .into_iter()
                .map(ShortcutEntry::named)
                .collect(),
        }
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the default config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from the default location.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults when it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;

        for shadow in config.shadowed()? {
            tracing::warn!(
                entry = shadow.index,
                shadowed_by = shadow.shadowed_by,
                shortcut = %shadow.label,
                "shortcut is unreachable"
            );
        }

        tracing::info!(
            path = %path.display(),
            shortcuts = config.shortcuts.len(),
            "loaded shortcut config"
        );
        Ok(config)
    }

    /// Saves configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context(format!(
                "Failed to create config directory: {}",
                dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        tracing::info!(path = %path.display(), "saved shortcut config");
        Ok(())
    }

    /// Validates every entry.
    pub fn validate(&self) -> Result<()> {
        self.resolved().map(|_| ())
    }

    /// Resolves all entries, in order.
    pub fn resolved(&self) -> Result<Vec<ResolvedShortcut>> {
        self.shortcuts
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .resolve()
                    .context(format!("Invalid shortcut entry #{}", index + 1))
            })
            .collect()
    }

    /// Entries that can never fire because an earlier entry has the same
    /// key (ignoring case) and modifier requirements.
    pub fn shadowed(&self) -> Result<Vec<ShadowedShortcut>> {
        let resolved = self.resolved()?;
        let mut shadowed = Vec::new();

        for (index, entry) in resolved.iter().enumerate() {
            if let Some(winner) = resolved[..index]
                .iter()
                .position(|earlier| earlier.conflicts_with(entry))
            {
                shadowed.push(ShadowedShortcut {
                    index,
                    shadowed_by: winner,
                    label: entry.label(),
                });
            }
        }

        Ok(shadowed)
    }

    /// Builds dispatcher definitions, asking `resolve_action` for each action id.
    pub fn to_dispatcher_config(
        &self,
        mut resolve_action: impl FnMut(&str) -> ActionFn,
    ) -> Result<DispatcherConfig> {
        let shortcuts = self
            .resolved()?
            .into_iter()
            .map(|entry| {
                let action = resolve_action(&entry.action);
                ShortcutDefinition::from_action(entry.key, entry.description, action)
                    .with_ctrl_or_meta(entry.ctrl_or_meta)
                    .with_shift(entry.shift)
            })
            .collect();

        Ok(DispatcherConfig::new(shortcuts).enabled(self.enabled))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
