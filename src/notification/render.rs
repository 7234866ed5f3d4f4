use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::state::{NotificationKind, NotificationState};
use crate::widgets::popup;

const MAX_WIDTH: u16 = 60;
const MARGIN: u16 = 1;

/// Width and height of the toast for `message`, before clamping to the frame
pub fn popup_size(message: &str) -> (u16, u16) {
    let content_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
    // borders (2) + padding (2)
    let width = content_width.saturating_add(4).min(MAX_WIDTH);
    let inner_width = width.saturating_sub(4).max(1);
    let lines = content_width.div_ceil(inner_width).max(1);
    (width, lines.saturating_add(2))
}

/// Render the current notification in the top-right corner, if any
pub fn render_notification(frame: &mut Frame, state: &mut NotificationState) {
    state.update();
    let Some(notification) = state.current() else {
        return;
    };

    let (width, height) = popup_size(&notification.message);
    let area = popup::top_right_popup(frame.area(), width, height, MARGIN);
    if area.width < 5 || area.height < 3 {
        return;
    }

    let color = match notification.kind {
        NotificationKind::Info => Color::Cyan,
        NotificationKind::Warning => Color::Yellow,
    };

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(format!(" {} ", notification.message))
        .block(block)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
