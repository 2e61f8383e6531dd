//! LazyKeys Library
//!
//! This library provides a focus-aware keyboard shortcut dispatcher, named
//! shortcut templates, a TOML configuration layer, and a terminal host that
//! drives the dispatcher from crossterm key events.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod dispatcher;
pub mod shortcuts;
#[cfg(feature = "ratatui")]
pub mod tui;

pub use dispatcher::{
    ActionFn, DispatcherConfig, FocusTarget, KeyInput, KeyboardHub, ShortcutDefinition,
    ShortcutDispatcher, Subscription,
};
pub use shortcuts::ShortcutName;
