use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::suggestion::Suggestion;
use crate::widgets::popup;

const SPINNER_FRAMES: [&str; 4] = ["🍜", "🍕", "🌮", "🍩"];
/// Frames per spinner step
const SPINNER_SPEED: u64 = 8;

pub fn spinner_frame(frame_count: u64) -> &'static str {
    SPINNER_FRAMES[((frame_count / SPINNER_SPEED) % SPINNER_FRAMES.len() as u64) as usize]
}

pub fn render_page(app: &App, frame: &mut Frame, area: Rect) {
    let area = popup::inset_rect(area, 2, 0);

    match &app.resolver.suggestion {
        Some(suggestion) if app.resolver.phase.is_finished() => {
            render_suggestion(suggestion, app.resolver.notice.as_deref(), frame, area)
        }
        _ => render_loading(app, frame, area),
    }
}

fn render_loading(app: &App, frame: &mut Frame, area: Rect) {
    let spinner = spinner_frame(app.frame_count);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Preparing to DESTROY you... 💀✨", spinner),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Our AI is cooking up the most UNHINGED roast fr fr..."),
        Line::from(""),
        Line::from(Span::styled(
            format!("Your vibe: \"{}\"", app.mood()),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_suggestion(suggestion: &Suggestion, notice: Option<&str>, frame: &mut Frame, area: Rect) {
    let notice_height = if notice.is_some() { 3 } else { 0 };

    let layout = Layout::vertical([
        Constraint::Length(notice_height), // Degraded notice
        Constraint::Length(3),             // Food
        Constraint::Min(3),                // Recipe
        Constraint::Min(3),                // Roast
        Constraint::Length(1),             // Sign-off
    ])
    .split(area);

    if let Some(notice) = notice {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));
        frame.render_widget(
            Paragraph::new(Span::styled(notice, Style::default().fg(Color::Red))).block(block),
            layout[0],
        );
    }

    let food = Paragraph::new(Span::styled(
        suggestion.food.as_str(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(titled_block(" YOUR CHAOTIC MEAL BESTIE ", Color::Yellow));
    frame.render_widget(food, layout[1]);

    let recipe = Paragraph::new(suggestion.recipe.as_str())
        .wrap(Wrap { trim: true })
        .block(titled_block(" Recipe (if you can even handle it) 💀 ", Color::Cyan));
    frame.render_widget(recipe, layout[2]);

    let roast = Paragraph::new(suggestion.roast.as_str())
        .wrap(Wrap { trim: true })
        .block(titled_block(" UNHINGED REALITY CHECK ✨💀 ", Color::Magenta));
    frame.render_widget(roast, layout[3]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Hope this made your day WORSE bestie 💀✨",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
        layout[4],
    );
}

fn titled_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(color))
}
