//! Single-line text input used as the editable focus target.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Text buffer with a cursor, measured in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    /// Creates an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in characters.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Empty the field.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Apply the default editing behavior for a key.
    ///
    /// Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
        {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.value.remove(at);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.value.chars().count() {
                    let at = self.byte_offset(self.cursor);
                    self.value.remove(at);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.value.chars().count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.chars().count(),
            _ => return false,
        }
        true
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.value
            .char_indices()
            .nth(chars)
            .map_or(self.value.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(field: &mut TextField, code: KeyCode) -> bool {
        field.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_typing_and_editing() {
        let mut field = TextField::new();
        for c in "hallo".chars() {
            assert!(press(&mut field, KeyCode::Char(c)));
        }
        assert_eq!(field.value(), "hallo");

        press(&mut field, KeyCode::Left);
        press(&mut field, KeyCode::Left);
        press(&mut field, KeyCode::Left);
        press(&mut field, KeyCode::Backspace);
        press(&mut field, KeyCode::Char('e'));
        assert_eq!(field.value(), "hello");
        assert_eq!(field.cursor(), 2);

        press(&mut field, KeyCode::End);
        press(&mut field, KeyCode::Delete);
        assert_eq!(field.value(), "hello");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut field = TextField::new();
        press(&mut field, KeyCode::Char('ü'));
        press(&mut field, KeyCode::Char('ß'));
        press(&mut field, KeyCode::Home);
        press(&mut field, KeyCode::Delete);
        assert_eq!(field.value(), "ß");
    }

    #[test]
    fn test_ignores_control_chords() {
        let mut field = TextField::new();
        assert!(!field.handle_key(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL)));
        assert!(!press(&mut field, KeyCode::Esc));
        assert_eq!(field.value(), "");
    }
}
