use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;
use crate::flow::Page;

/// Shown when a new round is asked for before the current one finished
pub const STILL_COOKING: &str = "Hold up bestie, still cooking your roast 🍳";

/// How long to wait for input before redrawing (spinner, worker responses)
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => self.handle_paste(&text),
                _ => {}
            }
        }
        self.poll();
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.flow.page() {
            Page::Home => self.handle_home_key(key),
            Page::VibeCheck => self.handle_vibe_check_key(key),
            Page::RealityCheck => self.handle_reality_check_key(key),
        }
    }

    /// Pasted text goes into the mood field on the vibe check page
    pub fn handle_paste(&mut self, text: &str) {
        if self.help.visible || self.flow.page() != Page::VibeCheck {
            return;
        }
        self.input.insert_text(text);
        self.sync_mood();
    }

    /// Keys that work on every page
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Help popup blocks everything else while visible
        if self.help.visible {
            match key.code {
                KeyCode::Esc | KeyCode::F(1) => self.help.visible = false,
                KeyCode::Char('q') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.help.visible = false;
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.quit();
                }
                _ => {}
            }
            return true;
        }

        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        if key.code == KeyCode::F(1) {
            self.help.toggle();
            return true;
        }

        false
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right => {
                self.flow.advance();
            }
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_vibe_check_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.submit_mood();
            }
            KeyCode::Esc => self.go_back(),
            KeyCode::Tab => {
                self.input.cycle_quick_mood(true);
                self.sync_mood();
            }
            KeyCode::BackTab => {
                self.input.cycle_quick_mood(false);
                self.sync_mood();
            }
            // The mood is a single line; these would open a second one
            KeyCode::Char('m' | 'j') if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            _ => {
                self.input.textarea.input(key);
                self.sync_mood();
            }
        }
    }

    fn handle_reality_check_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Left | KeyCode::Char('b') => self.go_back(),
            // Results are read-only until the round finishes
            KeyCode::Char('r' | 's') if self.resolver.is_loading() => {
                self.notification.show(STILL_COOKING);
            }
            KeyCode::Char('r') => self.try_again(),
            KeyCode::Char('s') => self.start_over(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }
}
