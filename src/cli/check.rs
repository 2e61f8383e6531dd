//! `lazykeys check`: validate the shortcut file and report unreachable entries.

use clap::Args;
use std::path::Path;

use crate::cli::common::{config_path, CliError, CliResult};
use crate::config::Config;

/// Validate the shortcut configuration
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self, config_path_arg: Option<&Path>) -> CliResult<()> {
        let path = config_path(config_path_arg)?;

        let config = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))?;
            toml::from_str::<Config>(&content).map_err(|e| {
                CliError::validation(format!("Failed to parse {}: {e}", path.display()))
            })?
        } else {
            println!("No config file at {}; checking built-in defaults", path.display());
            println!("  Run `lazykeys init` to create one");
            Config::new()
        };

        if let Err(e) = config.validate() {
            println!("✗ Validation failed");
            println!("  ✗ {e:#}");
            return Err(CliError::validation("Validation failed"));
        }

        let shadowed = config
            .shadowed()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        println!("✓ {} shortcut(s) valid", config.shortcuts.len());
        for shadow in &shadowed {
            println!(
                "  ⚠ Entry #{} ({}) is unreachable: entry #{} binds the same keys first",
                shadow.index + 1,
                shadow.label,
                shadow.shadowed_by + 1
            );
        }

        if self.strict && !shadowed.is_empty() {
            return Err(CliError::validation(format!(
                "{} warning(s) in strict mode",
                shadowed.len()
            )));
        }

        Ok(())
    }
}
