//! Host key events as seen by the dispatcher.
//!
//! `KeyInput` carries the browser-style key identifier, the three modifier
//! flags the matcher cares about, and the focus target the event came from.
//! Terminal events from crossterm are converted into this shape by the host.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The key that stays live even while an editable target has focus.
pub const DISMISS_KEY: &str = "Escape";

/// The UI element an event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// No particular element (the surface itself)
    #[default]
    Document,
    /// A non-editable control such as a list or button
    Control,
    /// Single-line text input
    TextField,
    /// Multi-line text input
    TextArea,
    /// Any other element that accepts typed text
    Editable,
}

impl FocusTarget {
    /// Whether typing into this target should suppress shortcuts.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::TextField | Self::TextArea | Self::Editable)
    }
}

/// A single key press delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyInput {
    /// Key identifier (e.g. `"k"`, `"K"`, `"Escape"`, `"ArrowUp"`)
    pub key: String,
    /// Control held
    pub ctrl: bool,
    /// Meta / command / super held
    pub meta: bool,
    /// Shift held
    pub shift: bool,
    /// Element that had focus when the key was pressed
    pub target: FocusTarget,
    default_prevented: bool,
}

impl KeyInput {
    /// Create an event for `key` with no modifiers, targeting the document.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Set the control flag.
    #[must_use]
    pub const fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Set the meta flag.
    #[must_use]
    pub const fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Set the shift flag.
    #[must_use]
    pub const fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Set the originating target.
    #[must_use]
    pub const fn with_target(mut self, target: FocusTarget) -> Self {
        self.target = target;
        self
    }

    /// Either of the primary modifiers is held.
    #[must_use]
    pub const fn has_ctrl_or_meta(&self) -> bool {
        self.ctrl || self.meta
    }

    /// Stop the host from applying its default behavior for this key.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a listener claimed this event.
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// The key is the dismissal key, compared case-insensitively.
    #[must_use]
    pub fn is_dismiss_key(&self) -> bool {
        self.key.eq_ignore_ascii_case(DISMISS_KEY)
    }
}

impl From<KeyEvent> for KeyInput {
    fn from(event: KeyEvent) -> Self {
        let mut shift = event.modifiers.contains(KeyModifiers::SHIFT);

        let key = match event.code {
            KeyCode::Char(' ') => " ".to_string(),
            KeyCode::Char(c) => {
                if implies_shift(c) {
                    shift = true;
                }
                c.to_string()
            }
            KeyCode::Esc => "Escape".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => {
                shift = true;
                "Tab".to_string()
            }
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Delete => "Delete".to_string(),
            KeyCode::Insert => "Insert".to_string(),
            KeyCode::Up => "ArrowUp".to_string(),
            KeyCode::Down => "ArrowDown".to_string(),
            KeyCode::Left => "ArrowLeft".to_string(),
            KeyCode::Right => "ArrowRight".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PageUp".to_string(),
            KeyCode::PageDown => "PageDown".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            // Unidentified keys get an empty identifier, which never matches
            _ => String::new(),
        };

        Self {
            key,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            meta: event
                .modifiers
                .intersects(KeyModifiers::SUPER | KeyModifiers::META),
            shift,
            target: FocusTarget::Document,
            default_prevented: false,
        }
    }
}

/// Legacy terminals drop SHIFT for shifted symbols; restore it for the
/// US-layout set. Letters keep the terminal's own SHIFT flag, so Caps Lock
/// input (`K` without shift) still reaches plain `k` bindings.
fn implies_shift(c: char) -> bool {
    "~!@#$%^&*()_+{}|:\"<>?".contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editable_targets() {
        assert!(FocusTarget::TextField.is_editable());
        assert!(FocusTarget::TextArea.is_editable());
        assert!(FocusTarget::Editable.is_editable());
        assert!(!FocusTarget::Document.is_editable());
        assert!(!FocusTarget::Control.is_editable());
    }

    #[test]
    fn test_from_crossterm_char_with_ctrl() {
        let input = KeyInput::from(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL));
        assert_eq!(input.key, "k");
        assert!(input.ctrl);
        assert!(!input.meta);
        assert!(!input.shift);
        assert_eq!(input.target, FocusTarget::Document);
        assert!(!input.default_prevented());
    }

    #[test]
    fn test_from_crossterm_super_maps_to_meta() {
        let input = KeyInput::from(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::SUPER));
        assert!(input.meta);
        assert!(input.has_ctrl_or_meta());
    }

    #[test]
    fn test_from_crossterm_named_keys() {
        let esc = KeyInput::from(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(esc.key, "Escape");
        assert!(esc.is_dismiss_key());

        let up = KeyInput::from(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(up.key, "ArrowUp");

        let f5 = KeyInput::from(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE));
        assert_eq!(f5.key, "F5");

        let space = KeyInput::from(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        assert_eq!(space.key, " ");
    }

    #[test]
    fn test_from_crossterm_shifted_symbol_restores_shift() {
        let question = KeyInput::from(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE));
        assert_eq!(question.key, "?");
        assert!(question.shift);

        let lower = KeyInput::from(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE));
        assert!(!lower.shift);
    }

    #[test]
    fn test_from_crossterm_caps_lock_letter_keeps_shift_off() {
        let caps = KeyInput::from(KeyEvent::new(KeyCode::Char('K'), KeyModifiers::NONE));
        assert_eq!(caps.key, "K");
        assert!(!caps.shift);

        let plain_k = crate::dispatcher::ShortcutDefinition::new("k", "Previous", || {});
        assert!(plain_k.matches(&caps));

        let shifted = KeyInput::from(KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT));
        assert!(shifted.shift);
        assert!(!plain_k.matches(&shifted));
    }

    #[test]
    fn test_from_crossterm_backtab_is_shift_tab() {
        let input = KeyInput::from(KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE));
        assert_eq!(input.key, "Tab");
        assert!(input.shift);
    }

    #[test]
    fn test_from_crossterm_unidentified_key_is_empty() {
        let input = KeyInput::from(KeyEvent::new(KeyCode::CapsLock, KeyModifiers::NONE));
        assert!(input.key.is_empty());
    }

    #[test]
    fn test_prevent_default() {
        let mut input = KeyInput::new("k");
        assert!(!input.default_prevented());
        input.prevent_default();
        assert!(input.default_prevented());
    }
}
