//! Help line rendering
//!
//! This module handles rendering of the help line at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::flow::Page;

/// Shortcut hints for the current page and round
pub fn help_text(app: &App) -> &'static str {
    match app.flow.page() {
        Page::Home => " Enter: Start | F1: Help | q: Quit",
        Page::VibeCheck => {
            if app.flow.can_submit() {
                " Enter: Destroy Me | Tab: Quick moods | Esc: Back | F1: Help | Ctrl+C: Quit"
            } else {
                " Type your mood | Tab: Quick moods | Esc: Back | F1: Help | Ctrl+C: Quit"
            }
        }
        Page::RealityCheck => {
            if app.resolver.is_loading() {
                " Esc: Escape (coward) | Ctrl+C: Quit"
            } else {
                " r: Roast me again | s: Start over | Esc: Back | q: Quit"
            }
        }
    }
}

/// Render the help line (bottom of screen)
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(help_text(app), Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("  [{} mode]", app.mode.label()),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
