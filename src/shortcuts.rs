//! Named shortcut templates.
//!
//! Consumers refer to well-known shortcuts through [`ShortcutName`] instead of
//! spelling key strings by hand. Each name maps to a template (key, modifiers,
//! description) and a stable id used in configuration files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dispatcher::{ActionFn, ShortcutDefinition, DISMISS_KEY};

/// Every predefined shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutName {
    // === NAVIGATION ===
    Search,
    NextItem,
    PreviousItem,

    // === EDITING ===
    NewItem,
    Save,
    Refresh,

    // === HELP ===
    ToggleHelp,

    // === GENERAL ===
    Close,
    Quit,
}

/// Key and modifier requirements for a named shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutTemplate {
    /// Key identifier
    pub key: &'static str,
    /// Ctrl or meta must be held
    pub ctrl_or_meta: bool,
    /// Shift must be held
    pub shift: bool,
    /// Display text
    pub description: &'static str,
}

impl ShortcutTemplate {
    const fn plain(key: &'static str, description: &'static str) -> Self {
        Self {
            key,
            ctrl_or_meta: false,
            shift: false,
            description,
        }
    }

    const fn accel(key: &'static str, description: &'static str) -> Self {
        Self {
            key,
            ctrl_or_meta: true,
            shift: false,
            description,
        }
    }
}

impl ShortcutName {
    /// All names in their default priority order.
    pub const ALL: [Self; 9] = [
        Self::Search,
        Self::NextItem,
        Self::PreviousItem,
        Self::NewItem,
        Self::Save,
        Self::Refresh,
        Self::ToggleHelp,
        Self::Close,
        Self::Quit,
    ];

    /// Stable id used in configuration files.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::NextItem => "next_item",
            Self::PreviousItem => "previous_item",
            Self::NewItem => "new_item",
            Self::Save => "save",
            Self::Refresh => "refresh",
            Self::ToggleHelp => "toggle_help",
            Self::Close => "close",
            Self::Quit => "quit",
        }
    }

    /// The key and modifiers this name stands for.
    #[must_use]
    pub const fn template(&self) -> ShortcutTemplate {
        match self {
            Self::Search => ShortcutTemplate::accel("k", "Focus search"),
            Self::NextItem => ShortcutTemplate::plain("j", "Next item"),
            Self::PreviousItem => ShortcutTemplate::plain("k", "Previous item"),
            Self::NewItem => ShortcutTemplate::plain("n", "New item"),
            Self::Save => ShortcutTemplate::accel("s", "Save"),
            Self::Refresh => ShortcutTemplate {
                key: "r",
                ctrl_or_meta: true,
                shift: true,
                description: "Refresh",
            },
            Self::ToggleHelp => ShortcutTemplate {
                key: "?",
                ctrl_or_meta: false,
                shift: true,
                description: "Toggle help",
            },
            Self::Close => ShortcutTemplate::plain(DISMISS_KEY, "Close / cancel"),
            Self::Quit => ShortcutTemplate::accel("q", "Quit"),
        }
    }

    /// Build a definition from this template.
    #[must_use]
    pub fn bind(self, action: ActionFn) -> ShortcutDefinition {
        let template = self.template();
        ShortcutDefinition::from_action(template.key, template.description, action)
            .with_ctrl_or_meta(template.ctrl_or_meta)
            .with_shift(template.shift)
    }
}

impl fmt::Display for ShortcutName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ShortcutName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.id() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown shortcut name: {s}"))
    }
}

impl Serialize for ShortcutName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for ShortcutName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        id.parse::<Self>().map_err(serde::de::Error::custom)
    }
}
