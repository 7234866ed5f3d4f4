//! Tests for app_render

use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use super::App;
use crate::flow::Page;
use crate::help::help_line_render::help_text;
use crate::resolver::{DEGRADED_NOTICE, ResolutionPhase};
use crate::suggestion::fallback_suggestion;
use crate::test_utils::test_helpers::{app_with_mood, slow_test_app, test_app, wait_for_round};

const TEST_WIDTH: u16 = 100;
const TEST_HEIGHT: u16 = 40;

/// Render the app and return the screen as text, one line per row
fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn render(app: &mut App) -> String {
    render_to_string(app, TEST_WIDTH, TEST_HEIGHT)
}

#[test]
fn test_render_home_page() {
    let mut app = test_app();
    let screen = render(&mut app);

    assert!(screen.contains("EAT YOUR FEELINGS"));
    assert!(screen.contains("step 1/3"));
    assert!(screen.contains("Warning: This app is NOT here to help you feel better"));
    assert!(screen.contains("Press Enter: Let's Get Toxic"));
    assert!(screen.contains("[local mode]"));
}

#[test]
fn test_render_vibe_check_page() {
    let mut app = app_with_mood("kinda sad");
    let screen = render(&mut app);

    assert!(screen.contains("step 2/3"));
    assert!(screen.contains("What's your current vibe?"));
    assert!(screen.contains("kinda sad"));
    assert!(screen.contains("Destroy Me Pls"));
    assert!(screen.contains("feeling sad fr"));
    assert!(screen.contains("bored out of my mind periodt"));
}

#[test]
fn test_render_reality_check_loading() {
    let mut app = slow_test_app(Duration::from_secs(5));
    app.flow.advance();
    app.input.set_mood("sad");
    app.submit_mood();

    let screen = render(&mut app);

    assert!(screen.contains("step 3/3"));
    assert!(screen.contains("Preparing to DESTROY you..."));
    assert!(screen.contains("Your vibe: \"sad\""));
    assert!(!screen.contains("YOUR CHAOTIC MEAL BESTIE"));
}

#[test]
fn test_render_reality_check_resolved() {
    let mut app = app_with_mood("stressed out");
    app.submit_mood();
    assert!(wait_for_round(&mut app, 2000));

    let screen = render(&mut app);

    assert!(screen.contains("YOUR CHAOTIC MEAL BESTIE"));
    assert!(screen.contains("Homemade Mac and Cheese"));
    assert!(screen.contains("Recipe (if you can even handle it)"));
    assert!(screen.contains("UNHINGED REALITY CHECK"));
    assert!(!screen.contains("Even our AI is having a breakdown"));
}

#[test]
fn test_render_reality_check_fallback_notice() {
    let mut app = test_app();
    app.flow.advance();
    app.flow.set_mood("sad");
    app.flow.advance();
    app.resolver.phase = ResolutionPhase::FallbackResolved;
    app.resolver.suggestion = Some(fallback_suggestion("sad"));
    app.resolver.notice = Some(DEGRADED_NOTICE.to_string());

    let screen = render(&mut app);

    assert!(screen.contains("Instant Ramen at 3AM"));
    assert!(screen.contains("Even our AI is having a breakdown rn bestie"));
}

#[test]
fn test_render_help_popup() {
    let mut app = test_app();
    app.help.visible = true;

    let screen = render(&mut app);

    assert!(screen.contains("Keyboard Shortcuts"));
    assert!(screen.contains("Cycle through quick moods"));
}

#[test]
fn test_render_notification() {
    let mut app = test_app();
    app.notification.show("Config ignored: bad toml");

    let screen = render(&mut app);
    assert!(screen.contains("Config ignored: bad toml"));
}

#[test]
fn test_render_increments_frame_count() {
    let mut app = test_app();
    render(&mut app);
    render(&mut app);
    assert_eq!(app.frame_count, 2);
}

#[test]
fn test_render_small_terminal_does_not_panic() {
    let mut app = app_with_mood("sad");
    app.help.visible = true;
    render_to_string(&mut app, 20, 8);
}

#[test]
fn test_help_text_per_page() {
    let mut app = test_app();
    assert!(help_text(&app).contains("Enter: Start"));

    app.flow.advance();
    assert!(help_text(&app).contains("Type your mood"));

    app.flow.set_mood("sad");
    assert!(help_text(&app).contains("Enter: Destroy Me"));

    app.flow.advance();
    assert_eq!(app.flow.page(), Page::RealityCheck);
    assert!(help_text(&app).contains("r: Roast me again"));
}
