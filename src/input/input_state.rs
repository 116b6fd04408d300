use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::theme;

const PLACEHOLDER: &str = "e.g., Roses";

/// Single-line flower name field
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(theme::input::CURSOR);
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_placeholder_style(Style::default().fg(theme::input::PLACEHOLDER));

        Self { textarea }
    }

    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the whole field, leaving the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.clear();
        self.textarea.insert_str(single_line(text));
    }

    pub fn clear(&mut self) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
    }

    pub fn insert_paste(&mut self, text: &str) {
        self.textarea.insert_str(single_line(text));
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// The field is one line; pasted newlines become spaces
fn single_line(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(" ")
}
