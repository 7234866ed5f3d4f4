use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::flow::Page;
use crate::notification::render_notification;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.frame_count = self.frame_count.wrapping_add(1);

        let layout = Layout::vertical([
            Constraint::Length(3), // Header with page title and step
            Constraint::Min(3),    // Page body
            Constraint::Length(1), // Help line
        ])
        .split(frame.area());

        self.render_header(frame, layout[0]);

        match self.flow.page() {
            Page::Home => crate::pages::home_render::render_page(frame, layout[1]),
            Page::VibeCheck => crate::pages::vibe_check_render::render_page(self, frame, layout[1]),
            Page::RealityCheck => {
                crate::pages::reality_check_render::render_page(self, frame, layout[1])
            }
        }

        crate::help::help_line_render::render_line(self, frame, layout[2]);

        if self.help.visible {
            crate::help::help_popup_render::render_popup(frame);
        }

        render_notification(frame, &mut self.notification);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let page = self.flow.page();
        let step = format!(" step {}/{} ", page.index() + 1, Page::ALL.len());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title_bottom(Line::from(step).alignment(Alignment::Right));

        let title = Line::from(Span::styled(
            page.title(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);

        frame.render_widget(Paragraph::new(title).block(block), area);
    }
}
