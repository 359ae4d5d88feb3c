//! Single-line text input with a character cursor.
//!
//! Shared by the search bar and the editor title field. The cursor counts
//! characters, not bytes, so multi-byte input edits cleanly.

/// Editable line of text. Cursor is always in `0..=char_count`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    /// Empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Input prefilled with `text`, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Consume the input, keeping its text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Insert at the cursor and advance it.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. No-op at 0.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
    }

    /// Delete the character under the cursor. No-op at the end.
    pub fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }

    /// Cursor one character left.
    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Cursor one character right.
    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    /// Cursor to the start.
    pub fn home(&mut self) {
        self.cursor = 0;
    }

    /// Cursor past the last character.
    pub fn end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Text before and after the cursor, for rendering.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.byte_offset(self.cursor))
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_advances_cursor() {
        let mut input = TextInput::new();
        input.insert('a');
        input.insert('b');
        assert_eq!(input.text(), "ab");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut input = TextInput::with_text("ac");
        input.left();
        input.insert('b');
        assert_eq!(input.text(), "abc");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = TextInput::with_text("x");
        input.home();
        input.backspace();
        assert_eq!(input.text(), "x");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn backspace_handles_multibyte_chars() {
        let mut input = TextInput::with_text("café");
        input.backspace();
        assert_eq!(input.text(), "caf");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let mut input = TextInput::with_text("abc");
        input.home();
        input.delete();
        assert_eq!(input.text(), "bc");
        assert_eq!(input.cursor(), 0);
        input.end();
        input.delete();
        assert_eq!(input.text(), "bc");
    }

    #[test]
    fn cursor_saturates_at_both_ends() {
        let mut input = TextInput::with_text("ab");
        input.right();
        assert_eq!(input.cursor(), 2);
        input.home();
        input.left();
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn split_at_cursor_uses_char_positions() {
        let mut input = TextInput::with_text("née");
        input.left();
        assert_eq!(input.split_at_cursor(), ("né", "e"));
    }
}
