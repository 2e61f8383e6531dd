//! `lazykeys init`: write the default shortcut file.

use clap::Args;
use std::path::Path;

use crate::cli::common::{config_path, CliError, CliResult};
use crate::config::Config;

/// Write a config file containing every predefined shortcut
#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self, config_path_arg: Option<&Path>) -> CliResult<()> {
        let path = config_path(config_path_arg)?;

        if path.exists() && !self.force {
            return Err(CliError::validation(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        Config::new()
            .save_to(&path)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        println!("Wrote {}", path.display());
        Ok(())
    }
}
