//! Filter prompt overlay state

/// Single-line text input shown over the status line while typing a filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPrompt {
    text: String,
}

impl FilterPrompt {
    /// Prompt pre-filled with `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn insert_char(&mut self, ch: char) {
        // Single line only
        if ch != '\n' && ch != '\r' {
            self.text.push(ch);
        }
    }

    pub fn delete_backward(&mut self) {
        self.text.pop();
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
