//! `lazykeys list`: print the configured shortcuts in priority order.

use clap::Args;
use serde::Serialize;
use std::path::Path;

use crate::cli::common::{load_config, CliError, CliResult};

/// List configured shortcuts
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct ListOutput {
    enabled: bool,
    shortcuts: Vec<ShortcutOutput>,
}

#[derive(Serialize, Debug)]
struct ShortcutOutput {
    label: String,
    key: String,
    ctrl_or_meta: bool,
    shift: bool,
    action: String,
    description: String,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let resolved = config
            .resolved()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let output = ListOutput {
            enabled: config.enabled,
            shortcuts: resolved
                .into_iter()
                .map(|entry| ShortcutOutput {
                    label: entry.label(),
                    key: entry.key,
                    ctrl_or_meta: entry.ctrl_or_meta,
                    shift: entry.shift,
                    action: entry.action,
                    description: entry.description,
                })
                .collect(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        if !output.enabled {
            println!("(shortcuts disabled)");
        }
        let width = output
            .shortcuts
            .iter()
            .map(|s| s.label.chars().count())
            .max()
            .unwrap_or(0);
        for shortcut in &output.shortcuts {
            println!(
                "{:<width$}  {:<24}  {}",
                shortcut.label, shortcut.description, shortcut.action
            );
        }

        Ok(())
    }
}
