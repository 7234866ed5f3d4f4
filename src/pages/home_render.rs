use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::widgets::popup;

pub fn render_page(frame: &mut Frame, area: Rect) {
    let area = popup::inset_rect(area, 2, 1);

    let lines = vec![
        Line::from(Span::styled(
            "Because therapy is giving expensive energy 💸",
            Style::default().fg(Color::Cyan),
        )),
        Line::from("and we're here to make it WORSE periodt ✨"),
        Line::from(""),
        Line::from(Span::styled(
            "Ready to get absolutely DESTROYED by our AI? 🔥",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("We'll roast your feelings and serve you the most chaotic recipes fr fr"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter: Let's Get Toxic ✨",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "(no cap, this is gonna hurt bestie) 💀",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Warning: This app is NOT here to help you feel better",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "We're about to make your day 10x worse and serve you chaos on a plate 🍽️💀",
            Style::default().fg(Color::Red),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
