//! LazyKeys - keyboard shortcut dispatcher with a terminal host
//!
//! Without a subcommand this opens the terminal host, where the configured
//! shortcuts can be exercised live. The `list`, `check` and `init`
//! subcommands work on the shortcut file without a terminal UI.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lazykeys::cli::{CheckArgs, CliResult, InitArgs, ListArgs};

/// LazyKeys - keyboard shortcut dispatcher with a terminal host
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the shortcut file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the terminal host (default)
    Run(RunArgs),
    /// List configured shortcuts
    List(ListArgs),
    /// Validate the shortcut file
    Check(CheckArgs),
    /// Write the default shortcut file
    Init(InitArgs),
}

/// Open the terminal host
#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Use colors for light terminal backgrounds
    #[arg(long)]
    light: bool,

    /// Log file (defaults to lazykeys.log next to the shortcut file)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let result: CliResult<()> = match cli.command.unwrap_or(Command::Run(RunArgs::default())) {
        Command::Run(args) => return run_terminal(config_path, &args),
        Command::List(args) => {
            init_stderr_logging();
            args.execute(config_path)
        }
        Command::Check(args) => {
            init_stderr_logging();
            args.execute(config_path)
        }
        Command::Init(args) => {
            init_stderr_logging();
            args.execute(config_path)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.code.into());
    }

    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(feature = "ratatui")]
fn run_terminal(config_path: Option<&Path>, args: &RunArgs) -> Result<()> {
    use anyhow::Context;
    use lazykeys::config::Config;
    use lazykeys::constants::LOG_FILE_NAME;
    use lazykeys::tui;
    use std::fs::{self, OpenOptions};
    use std::sync::Mutex;

    let path = lazykeys::cli::common::config_path(config_path)?;

    // stdout belongs to the terminal UI, so logs go to a file
    let log_path = match &args.log_file {
        Some(log_path) => log_path.clone(),
        None => path
            .parent()
            .map_or_else(|| PathBuf::from(LOG_FILE_NAME), |dir| dir.join(LOG_FILE_NAME)),
    };
    if let Some(dir) = log_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .context(format!("Failed to create log directory: {}", dir.display()))?;
    }
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .context(format!("Failed to open log file: {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = Config::load_from(&path)?;
    let theme = if args.light {
        tui::Theme::light()
    } else {
        tui::Theme::dark()
    };

    let mut state = tui::AppState::new(&config, theme)?;
    tracing::info!(config = %path.display(), "starting terminal host");

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;

    result
}

#[cfg(not(feature = "ratatui"))]
fn run_terminal(_config_path: Option<&Path>, _args: &RunArgs) -> Result<()> {
    anyhow::bail!(
        "{} was built without the `ratatui` feature; use `list`, `check` or `init`",
        lazykeys::constants::APP_BINARY_NAME
    )
}
