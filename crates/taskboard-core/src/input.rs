/// Single-line text buffer with a byte-offset cursor kept on char boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    /// Cursor position in characters, for terminal cursor placement.
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_editing() {
        let mut input = InputState::new();
        for c in "milk".chars() {
            input.insert_char(c);
        }
        input.move_home();
        input.insert_char('B');
        input.insert_char(' ');
        assert_eq!(input.as_str(), "B milk");
        assert_eq!(input.cursor_pos(), 2);

        input.move_end();
        input.backspace();
        assert_eq!(input.as_str(), "B mil");
    }

    #[test]
    fn test_multibyte_cursor_stays_on_boundaries() {
        let mut input = InputState::new();
        input.set("2% lait entier é");
        input.move_left();
        assert_eq!(input.cursor_column(), 15);
        input.delete();
        assert_eq!(input.as_str(), "2% lait entier ");
        input.move_left();
        input.move_right();
        input.move_right();
        assert_eq!(input.cursor_pos(), input.as_str().len());
    }

    #[test]
    fn test_edges_are_noops() {
        let mut input = InputState::new();
        input.backspace();
        input.delete();
        input.move_left();
        input.move_right();
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut input = InputState::new();
        input.set("Buy milk");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor_column(), 0);
    }
}
