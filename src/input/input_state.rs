use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::mood::QUICK_MOODS;

const PLACEHOLDER: &str = "e.g., I'm literally dying inside and everything is falling apart...";

/// Mood input field state
pub struct InputState {
    pub textarea: TextArea<'static>,
    /// Quick mood last inserted with Tab / Shift+Tab
    pub quick_mood_index: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        // Configure for single-line input
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Your vibe ")
                .border_style(Style::default().fg(Color::Magenta)),
        );

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

        Self {
            textarea,
            quick_mood_index: None,
        }
    }

    /// Get the current mood text
    pub fn mood(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the whole input with `text`
    pub fn set_mood(&mut self, text: &str) {
        self.textarea.move_cursor(tui_textarea::CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(text);
    }

    /// Insert `text` at the cursor with line breaks flattened to spaces
    pub fn insert_text(&mut self, text: &str) {
        let flat: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        self.textarea.insert_str(flat);
    }

    pub fn clear(&mut self) {
        self.set_mood("");
        self.quick_mood_index = None;
    }

    /// Put the next (or previous) quick mood into the input
    pub fn cycle_quick_mood(&mut self, forward: bool) -> &'static str {
        let len = QUICK_MOODS.len();
        let index = match (self.quick_mood_index, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.quick_mood_index = Some(index);
        let mood = QUICK_MOODS[index];
        self.set_mood(mood);
        mood
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
