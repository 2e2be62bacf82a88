//! Single-line text input used for the filter expression.

use super::events::Key;
use unicode_width::UnicodeWidthStr;

pub const FILTER_PROMPT: &str = "Find: ";
pub const FILTER_PLACEHOLDER: &str = "package or vulnerability";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    prompt: String,
    placeholder: String,
    value: String,
    /// Cursor position in chars
    cursor: usize,
    focused: bool,
}

impl TextInput {
    pub fn new(prompt: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    /// A fresh, empty filter input.
    pub fn filter() -> Self {
        Self::new(FILTER_PROMPT, FILTER_PLACEHOLDER)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn focus(mut self) -> Self {
        self.focused = true;
        self
    }

    #[must_use]
    pub fn blur(mut self) -> Self {
        self.focused = false;
        self
    }

    /// Apply an editing key. A blurred input ignores every key.
    #[must_use]
    pub fn handle_key(mut self, key: Key) -> Self {
        if !self.focused {
            return self;
        }

        match key {
            Key::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
            }
            Key::Backspace if self.cursor > 0 => {
                let at = self.byte_offset(self.cursor - 1);
                self.value.remove(at);
                self.cursor -= 1;
            }
            Key::Delete if self.cursor < self.char_count() => {
                let at = self.byte_offset(self.cursor);
                self.value.remove(at);
            }
            Key::Left => self.cursor = self.cursor.saturating_sub(1),
            Key::Right => self.cursor = (self.cursor + 1).min(self.char_count()),
            Key::Home | Key::Ctrl('a') => self.cursor = 0,
            Key::End | Key::Ctrl('e') => self.cursor = self.char_count(),
            Key::Ctrl('u') => {
                let at = self.byte_offset(self.cursor);
                self.value.drain(..at);
                self.cursor = 0;
            }
            _ => {}
        }
        self
    }

    /// Text of the input line: prompt followed by the value, or the placeholder when empty.
    pub fn render(&self) -> String {
        if self.value.is_empty() {
            format!("{}{}", self.prompt, self.placeholder)
        } else {
            format!("{}{}", self.prompt, self.value)
        }
    }

    /// Display column of the cursor within the rendered line.
    pub fn cursor_column(&self) -> usize {
        let before: String = self.value.chars().take(self.cursor).collect();
        self.prompt.width() + before.width()
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }
}
