// Single-line text input used while editing a field
//
// The cursor is a byte offset that always sits on a char boundary. The
// rendered column is measured with unicode-width so wide glyphs (CJK,
// emoji) place the terminal cursor correctly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// What a key did to the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChange {
    /// Text changed; write it back to the document
    Edited,
    /// Only the cursor moved
    Moved,
    /// Key is not an editing key
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// Start editing `value` with the cursor at the end
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Display column of the cursor
    pub fn cursor_column(&self) -> usize {
        self.value[..self.cursor].width()
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text; line breaks become spaces
    pub fn insert_str(&mut self, text: &str) {
        let flat: String = text
            .chars()
            .filter(|c| *c != '\r')
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        self.value.insert_str(self.cursor, &flat);
        self.cursor += flat.len();
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) -> bool {
        match self.prev_boundary() {
            Some(prev) => {
                self.value.replace_range(prev..self.cursor, "");
                self.cursor = prev;
                true
            }
            None => false,
        }
    }

    /// Delete the char under the cursor
    pub fn delete(&mut self) -> bool {
        match self.next_boundary() {
            Some(next) => {
                self.value.replace_range(self.cursor..next, "");
                true
            }
            None => false,
        }
    }

    /// Delete everything before the cursor
    pub fn clear_to_start(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.value.replace_range(..self.cursor, "");
        self.cursor = 0;
        true
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    /// Apply an editing key. Enter and Esc are left to the caller.
    pub fn handle_key(&mut self, key: KeyEvent) -> InputChange {
        let edited = |changed: bool| {
            if changed {
                InputChange::Edited
            } else {
                InputChange::Moved
            }
        };

        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                edited(self.clear_to_start())
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_home();
                InputChange::Moved
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_end();
                InputChange::Moved
            }
            KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                InputChange::Ignored
            }
            KeyCode::Char(c) => {
                self.insert(c);
                InputChange::Edited
            }
            KeyCode::Backspace => edited(self.backspace()),
            KeyCode::Delete => edited(self.delete()),
            KeyCode::Left => {
                self.move_left();
                InputChange::Moved
            }
            KeyCode::Right => {
                self.move_right();
                InputChange::Moved
            }
            KeyCode::Home => {
                self.move_home();
                InputChange::Moved
            }
            KeyCode::End => {
                self.move_end();
                InputChange::Moved
            }
            _ => InputChange::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_appends_at_cursor() {
        let mut input = TextInput::new("Pot");
        for c in " roast".chars() {
            assert_eq!(input.handle_key(key(KeyCode::Char(c))), InputChange::Edited);
        }
        assert_eq!(input.value(), "Pot roast");

        input.move_home();
        input.insert('A');
        assert_eq!(input.value(), "APot roast");
        assert_eq!(input.cursor_column(), 1);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = TextInput::new("abc");
        assert!(input.backspace());
        assert_eq!(input.value(), "ab");
        assert!(!input.delete());

        input.move_home();
        assert!(!input.backspace());
        assert!(input.delete());
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn test_multibyte_cursor() {
        let mut input = TextInput::new("café");
        assert_eq!(input.cursor_column(), 4);
        input.move_left();
        assert_eq!(input.cursor_column(), 3);
        assert!(input.delete());
        assert_eq!(input.value(), "caf");

        let mut wide = TextInput::new("鍋料理");
        assert_eq!(wide.cursor_column(), 6);
        wide.handle_key(key(KeyCode::Backspace));
        assert_eq!(wide.value(), "鍋料");
        assert_eq!(wide.cursor_column(), 4);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = TextInput::new("");
        input.insert_str("one\r\ntwo");
        assert_eq!(input.value(), "one two");
        assert_eq!(input.cursor_column(), 7);
    }

    #[test]
    fn test_control_keys() {
        let mut input = TextInput::new("hello world");
        input.move_left();
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(input.handle_key(ctrl_u), InputChange::Edited);
        assert_eq!(input.value(), "d");

        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(input.handle_key(ctrl_x), InputChange::Ignored);
        assert_eq!(input.handle_key(key(KeyCode::Enter)), InputChange::Ignored);
        assert_eq!(input.value(), "d");
    }
}
