//! Editable text field used by the upload and job details screens.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Single or multi-line text buffer with a cursor.
///
/// The cursor is a char index, not a byte index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
    multiline: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field where Enter inserts a newline
    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// True when the field holds only whitespace
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Replace the contents and put the cursor at the end
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Insert pasted text at the cursor. Single-line fields drop newlines.
    pub fn insert_str(&mut self, s: &str) {
        let text: String = if self.multiline {
            s.to_string()
        } else {
            s.chars().filter(|&c| c != '\n').collect()
        };
        let at = self.byte_index(self.cursor);
        self.value.insert_str(at, &text);
        self.cursor += text.chars().count();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Apply an editing key. Returns true if the key was consumed.
    ///
    /// Keys with Ctrl or Alt held are never consumed so they can reach the
    /// keybinding layer.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Enter if self.multiline => self.insert('\n'),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Text with a block cursor inserted, for rendering a focused field
    pub fn display_with_cursor(&self) -> String {
        let at = self.byte_index(self.cursor);
        let mut out = String::with_capacity(self.value.len() + 3);
        out.push_str(&self.value[..at]);
        out.push('█');
        out.push_str(&self.value[at..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut field = TextField::new();
        for c in "role".chars() {
            assert!(field.handle_key(key(KeyCode::Char(c))));
        }
        field.handle_key(key(KeyCode::Backspace));
        assert_eq!(field.value(), "rol");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn test_insert_in_middle_with_multibyte() {
        let mut field = TextField::new();
        field.set("Résumé");
        field.move_home();
        field.move_right();
        field.insert('X');
        assert_eq!(field.value(), "RXésumé");
        field.delete();
        assert_eq!(field.value(), "RXsumé");
    }

    #[test]
    fn test_enter_only_consumed_when_multiline() {
        let mut single = TextField::new();
        assert!(!single.handle_key(key(KeyCode::Enter)));

        let mut multi = TextField::multiline();
        assert!(multi.handle_key(key(KeyCode::Enter)));
        assert_eq!(multi.value(), "\n");
    }

    #[test]
    fn test_control_keys_pass_through() {
        let mut field = TextField::new();
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(!field.handle_key(ctrl_s));
        assert!(field.value().is_empty());
    }

    #[test]
    fn test_insert_str_strips_newlines_in_single_line() {
        let mut field = TextField::new();
        field.insert_str("a\nb");
        assert_eq!(field.value(), "ab");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_paste_lands_at_cursor_between_multibyte_chars() {
        let mut field = TextField::multiline();
        field.set("éé");
        field.move_home();
        field.move_right();
        field.insert_str("ü\nß");
        assert_eq!(field.value(), "éü\nßé");
        assert_eq!(field.cursor(), 4);
        field.insert('x');
        assert_eq!(field.value(), "éü\nßxé");
    }

    #[test]
    fn test_large_paste_moves_cursor_to_end() {
        let resume = "Experience: shipped résumé tooling.\n".repeat(2_000);
        let mut field = TextField::multiline();
        field.insert_str(&resume);
        assert_eq!(field.value(), resume);
        assert_eq!(field.cursor(), resume.chars().count());
    }

    #[test]
    fn test_blank_and_clear() {
        let mut field = TextField::new();
        field.set("   ");
        assert!(field.is_blank());
        field.clear();
        assert_eq!(field.cursor(), 0);
        assert!(field.value().is_empty());
    }

    #[test]
    fn test_display_with_cursor() {
        let mut field = TextField::new();
        field.set("ab");
        field.move_left();
        assert_eq!(field.display_with_cursor(), "a█b");
    }
}
