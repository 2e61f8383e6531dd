//! CLI command handlers for LazyKeys.
//!
//! This module provides headless, scriptable access to the shortcut
//! configuration for automation and CI.

pub mod check;
pub mod common;
pub mod init;
pub mod list;

// Re-export types used by main.rs and tests
pub use check::CheckArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use init::InitArgs;
pub use list::ListArgs;
