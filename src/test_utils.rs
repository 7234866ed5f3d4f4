#[cfg(test)]
pub mod test_helpers {
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::resolver::{FixedIndex, LocalResolver, Resolver};
    use crate::suggestion::SuggestionTable;

    /// Local resolver with no delay; unmatched moods get the first entry
    pub fn test_resolver() -> Resolver {
        Resolver::Local {
            resolver: LocalResolver::new(SuggestionTable::builtin(), Box::new(FixedIndex(0))),
            delay: Duration::ZERO,
        }
    }

    pub fn test_app() -> App {
        App::with_resolver(test_resolver())
    }

    /// App with a slow local resolver, for catching a round mid-flight
    pub fn slow_test_app(delay: Duration) -> App {
        App::with_resolver(Resolver::Local {
            resolver: LocalResolver::new(SuggestionTable::builtin(), Box::new(FixedIndex(0))),
            delay,
        })
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Type `text` into the focused input one key at a time
    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    /// App on the vibe check page with `mood` typed in
    pub fn app_with_mood(mood: &str) -> App {
        let mut app = test_app();
        app.flow.advance();
        type_text(&mut app, mood);
        app
    }

    /// Wait for the current round to finish by polling
    ///
    /// Returns true if the round finished, false on timeout.
    pub fn wait_for_round(app: &mut App, timeout_ms: u64) -> bool {
        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(timeout_ms);

        while start.elapsed() < timeout {
            app.poll();
            if app.resolver.phase.is_finished() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        false
    }
}
