//! Focus-aware keyboard shortcut dispatch.
//!
//! A [`ShortcutDispatcher`] holds an ordered list of [`ShortcutDefinition`]s and
//! a single subscription on a [`KeyboardHub`]. For each key press it runs the
//! matching rules below and invokes at most one action:
//!
//! 1. A disabled dispatcher ignores every event.
//! 2. While an editable target has focus, only the dismissal key is considered.
//! 3. Definitions are scanned in order. A definition matches when the key is
//!    equal ignoring case, ctrl/meta is held exactly when required, and shift is
//!    held exactly when required.
//! 4. The first match claims the event (default behavior suppressed) and its
//!    action runs once. Nothing else is tested.
//!
//! Modifier checks are symmetric: a plain `k` binding does not fire on
//! `Ctrl+K`, and a `Ctrl+K` binding does not fire on a bare `k`.

pub mod event;
pub mod hub;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub use event::{FocusTarget, KeyInput, DISMISS_KEY};
pub use hub::{KeyboardHub, Subscription};

/// Zero-argument effect run when a shortcut fires.
pub type ActionFn = Rc<dyn Fn()>;

/// A key combination bound to an action.
///
/// Definitions are immutable once built; replace the whole
/// [`DispatcherConfig`] to change bindings.
#[derive(Clone)]
pub struct ShortcutDefinition {
    key: String,
    ctrl_or_meta: bool,
    shift: bool,
    action: ActionFn,
    description: String,
}

impl ShortcutDefinition {
    /// Bind a plain key (no modifiers) to an action.
    pub fn new(
        key: impl Into<String>,
        description: impl Into<String>,
        action: impl Fn() + 'static,
    ) -> Self {
        Self::from_action(key, description, Rc::new(action))
    }

    /// Bind a plain key to an already shared action.
    pub fn from_action(
        key: impl Into<String>,
        description: impl Into<String>,
        action: ActionFn,
    ) -> Self {
        Self {
            key: key.into(),
            ctrl_or_meta: false,
            shift: false,
            action,
            description: description.into(),
        }
    }

    /// Require ctrl or meta to be held.
    #[must_use]
    pub fn with_ctrl_or_meta(mut self, required: bool) -> Self {
        self.ctrl_or_meta = required;
        self
    }

    /// Require shift to be held.
    #[must_use]
    pub fn with_shift(mut self, required: bool) -> Self {
        self.shift = required;
        self
    }

    /// Key identifier this definition responds to.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether ctrl or meta must be held.
    #[must_use]
    pub const fn requires_ctrl_or_meta(&self) -> bool {
        self.ctrl_or_meta
    }

    /// Whether shift must be held.
    #[must_use]
    pub const fn requires_shift(&self) -> bool {
        self.shift
    }

    /// Display text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Shared handle to the action.
    #[must_use]
    pub fn action(&self) -> ActionFn {
        Rc::clone(&self.action)
    }

    /// Human-readable key combination, e.g. `Ctrl/Cmd+Shift+R`.
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl_or_meta {
            parts.push("Ctrl/Cmd".to_string());
        }
        if self.shift {
            parts.push("Shift".to_string());
        }
        parts.push(display_key(&self.key));
        parts.join("+")
    }

    /// Whether `event` satisfies the key, primary-modifier and shift rules.
    #[must_use]
    pub fn matches(&self, event: &KeyInput) -> bool {
        keys_equal(&self.key, &event.key)
            && event.has_ctrl_or_meta() == self.ctrl_or_meta
            && event.shift == self.shift
    }
}

impl fmt::Debug for ShortcutDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutDefinition")
            .field("key", &self.key)
            .field("ctrl_or_meta", &self.ctrl_or_meta)
            .field("shift", &self.shift)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Case-insensitive key comparison. Empty identifiers never match.
fn keys_equal(expected: &str, actual: &str) -> bool {
    if expected.is_empty() || actual.is_empty() {
        return false;
    }
    expected == actual || expected.to_lowercase() == actual.to_lowercase()
}

fn display_key(key: &str) -> String {
    match key {
        " " => "Space".to_string(),
        "Escape" | "escape" => "Esc".to_string(),
        k if k.chars().count() == 1 => k.to_uppercase(),
        k => k.to_string(),
    }
}

/// Active shortcut set and enable flag.
#[derive(Clone, Debug)]
pub struct DispatcherConfig {
    /// Definitions in priority order
    pub shortcuts: Vec<ShortcutDefinition>,
    /// When false, no event is matched
    pub enabled: bool,
}

impl DispatcherConfig {
    /// An enabled config with the given definitions.
    #[must_use]
    pub fn new(shortcuts: Vec<ShortcutDefinition>) -> Self {
        Self {
            shortcuts,
            enabled: true,
        }
    }

    /// Set the enable flag.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Owns a shortcut set and one keyboard subscription.
///
/// The subscription is acquired by [`activate`](Self::activate) and released
/// by [`deactivate`](Self::deactivate) or when the dispatcher is dropped,
/// including during unwinding.
#[derive(Debug, Default)]
pub struct ShortcutDispatcher {
    config: Rc<RefCell<DispatcherConfig>>,
    subscription: Option<Subscription>,
}

impl ShortcutDispatcher {
    /// Create an inactive dispatcher with the given config.
    #[must_use]
    pub fn new(config: DispatcherConfig) -> Self {
        Self {
            config: Rc::new(RefCell::new(config)),
            subscription: None,
        }
    }

    /// Replace the active shortcut set and enable flag.
    ///
    /// Takes effect for the next event. Does not touch the subscription.
    pub fn configure(&self, config: DispatcherConfig) {
        tracing::debug!(
            shortcuts = config.shortcuts.len(),
            enabled = config.enabled,
            "dispatcher configured"
        );
        *self.config.borrow_mut() = config;
    }

    /// Subscribe to `hub`. A second call while active is a no-op.
    pub fn activate(&mut self, hub: &KeyboardHub) {
        if self.subscription.is_some() {
            return;
        }
        let config = Rc::clone(&self.config);
        self.subscription = Some(hub.subscribe(move |event| handle_key_event(&config, event)));
        tracing::debug!("dispatcher activated");
    }

    /// Release the subscription, if any.
    pub fn deactivate(&mut self) {
        if self.subscription.take().is_some() {
            tracing::debug!("dispatcher deactivated");
        }
    }

    /// Whether the dispatcher currently holds a subscription.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Whether matching is currently enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.borrow().enabled
    }

    /// Snapshot of the configured definitions, in priority order.
    #[must_use]
    pub fn shortcuts(&self) -> Vec<ShortcutDefinition> {
        self.config.borrow().shortcuts.clone()
    }
}

fn handle_key_event(config: &RefCell<DispatcherConfig>, event: &mut KeyInput) {
    // The borrow ends before the action runs so the action may reconfigure.
    let matched = {
        let config = config.borrow();
        if !config.enabled {
            return;
        }

        if event.target.is_editable() && !event.is_dismiss_key() {
            tracing::trace!(key = %event.key, "shortcut suppressed by editable focus");
            return;
        }

        config
            .shortcuts
            .iter()
            .find(|shortcut| shortcut.matches(event))
            .map(|shortcut| {
                tracing::debug!(
                    shortcut = %shortcut.label(),
                    description = %shortcut.description,
                    "shortcut matched"
                );
                shortcut.action()
            })
    };

    match matched {
        Some(action) => {
            event.prevent_default();
            action();
        }
        None => tracing::trace!(key = %event.key, "no shortcut matched"),
    }
}
