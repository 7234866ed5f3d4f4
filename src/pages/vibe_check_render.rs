use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::mood::QUICK_MOODS;
use crate::widgets::popup;

pub fn render_page(app: &App, frame: &mut Frame, area: Rect) {
    let area = popup::inset_rect(area, 2, 0);

    let layout = Layout::vertical([
        Constraint::Length(3),                             // Question
        Constraint::Length(3),                             // Input field
        Constraint::Length(1),                             // Submit
        Constraint::Length(QUICK_MOODS.len() as u16 + 2),  // Quick moods
        Constraint::Min(0),                                // Warning
    ])
    .split(area);

    render_question(frame, layout[0]);
    frame.render_widget(&app.input.textarea, layout[1]);
    render_submit(app, frame, layout[2]);
    render_quick_moods(app, frame, layout[3]);
    render_warning(frame, layout[4]);
}

fn render_question(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "What's your current vibe? 💭",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Time to spill the tea bestie ☕"),
        Line::from(Span::styled(
            "Tell us how you're feeling so we can make it 10x WORSE 💀✨",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Submit control, dimmed while the mood is blank
fn render_submit(app: &App, frame: &mut Frame, area: Rect) {
    let style = if app.flow.can_submit() {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(Span::styled("[ Enter ] Destroy Me Pls 💀", style));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_quick_moods(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Or choose your poison 🍷✨ (Tab) ")
        .border_style(Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = QUICK_MOODS
        .iter()
        .enumerate()
        .map(|(i, mood)| {
            if app.input.quick_mood_index == Some(i) {
                Line::from(Span::styled(
                    format!("> {}", mood),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {}", mood))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_warning(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "HEADS UP BESTIE",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from("Our AI is about to be absolutely UNHINGED fr fr 💀"),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
