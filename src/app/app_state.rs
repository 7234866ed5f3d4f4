use std::sync::mpsc;

use crate::config::{Config, ResolverMode};
use crate::flow::PageFlow;
use crate::help::HelpPopupState;
use crate::input::InputState;
use crate::notification::NotificationState;
use crate::resolver::worker::spawn_worker;
use crate::resolver::{DEGRADED_NOTICE, ResolutionPhase, Resolver, ResolverState};

/// Application state
pub struct App {
    pub flow: PageFlow,
    pub input: InputState,
    pub resolver: ResolverState,
    pub notification: NotificationState,
    pub help: HelpPopupState,
    /// Strategy the worker was started with
    pub mode: ResolverMode,
    pub should_quit: bool,
    /// Drives the loading spinner
    pub frame_count: u64,
}

impl App {
    /// Create the app with the resolver selected by `config`
    ///
    /// A remote setup that cannot be used falls back to local suggestions
    /// and says so in a notification.
    pub fn new(config: &Config) -> Self {
        let (resolver, warning) = match Resolver::from_config(&config.resolver) {
            Ok(resolver) => (resolver, None),
            Err(e) => {
                log::warn!("{}; using local suggestions", e);
                (
                    Resolver::local(&config.resolver),
                    Some(format!("{}. Using local suggestions.", e)),
                )
            }
        };

        let mut app = Self::with_resolver(resolver);
        if let Some(warning) = warning {
            app.notification.show_warning(&warning);
        }
        app
    }

    /// Create the app around an already-built resolver
    pub fn with_resolver(resolver: Resolver) -> Self {
        let mode = resolver.mode();
        log::info!("Starting with {} resolver", mode.label());

        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(resolver, request_rx, response_tx);

        let mut resolver_state = ResolverState::new();
        resolver_state.set_channels(request_tx, response_rx);

        Self {
            flow: PageFlow::new(),
            input: InputState::new(),
            resolver: resolver_state,
            notification: NotificationState::new(),
            help: HelpPopupState::new(),
            mode,
            should_quit: false,
            frame_count: 0,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mood(&self) -> &str {
        self.flow.mood()
    }

    /// Copy the input field into the flow's mood
    pub fn sync_mood(&mut self) {
        self.flow.set_mood(self.input.mood());
    }

    /// Submit the mood and start a round
    ///
    /// Ignored for a blank mood or while a round is loading.
    pub fn submit_mood(&mut self) -> bool {
        if self.resolver.is_loading() {
            return false;
        }
        self.sync_mood();
        if !self.flow.submit() {
            return false;
        }

        self.resolver.start_round(self.flow.mood());
        if self.resolver.phase == ResolutionPhase::FallbackResolved {
            self.notification.show_warning(DEGRADED_NOTICE);
        }
        true
    }

    /// Pick up worker responses and expire notifications; once per frame
    pub fn poll(&mut self) {
        if self.resolver.poll_response() == Some(ResolutionPhase::FallbackResolved) {
            self.notification.show_warning(DEGRADED_NOTICE);
        }
        self.notification.update();
    }

    /// Go back one page, abandoning any round in progress
    pub fn go_back(&mut self) {
        self.resolver.cancel_round();
        self.flow.retreat();
    }

    /// Clear the mood and return to the vibe check for another round
    pub fn try_again(&mut self) {
        self.resolver.cancel_round();
        self.notification.clear();
        self.flow.reset();
        self.input.clear();
    }

    /// Back to the home page with everything cleared
    pub fn start_over(&mut self) {
        self.resolver.cancel_round();
        self.notification.clear();
        self.flow.start_over();
        self.input.clear();
    }

    pub fn quit(&mut self) {
        self.resolver.cancel_round();
        self.should_quit = true;
    }
}
