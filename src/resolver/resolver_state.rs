//! Resolver state management
//!
//! Tracks the suggestion lifecycle of the current round and holds the channel
//! handles for talking to the worker thread.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use tokio_util::sync::CancellationToken;

use super::worker::{ResolveRequest, ResolveResponse};
use crate::suggestion::{Suggestion, fallback_suggestion};

/// Notice shown when the fallback suggestion had to be used
pub const DEGRADED_NOTICE: &str = "Even our AI is having a breakdown rn bestie 💀";

/// Lifecycle of one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionPhase {
    #[default]
    Idle,
    Loading,
    Resolved,
    FallbackResolved,
}

impl ResolutionPhase {
    /// Resolved and FallbackResolved end a round
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            ResolutionPhase::Resolved | ResolutionPhase::FallbackResolved
        )
    }
}

/// Suggestion state for the reality check page
#[derive(Debug, Default)]
pub struct ResolverState {
    pub phase: ResolutionPhase,
    /// Suggestion for the current round, once finished
    pub suggestion: Option<Suggestion>,
    /// Degraded-service notice for the current round
    pub notice: Option<String>,
    request_tx: Option<Sender<ResolveRequest>>,
    response_rx: Option<Receiver<ResolveResponse>>,
    /// Incremented per round so late answers from older rounds are dropped
    request_id: u64,
    in_flight: Option<InFlight>,
}

#[derive(Debug)]
struct InFlight {
    request_id: u64,
    mood: String,
    cancel: CancellationToken,
}

impl ResolverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<ResolveRequest>,
        response_rx: Receiver<ResolveResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ResolutionPhase::Loading
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a round for `mood`
    ///
    /// Ignored while a round is loading or when the trimmed mood is empty.
    /// If the worker cannot be reached the fallback is applied right away.
    /// The mood is passed on as typed; the fallback suggestion carries it
    /// unchanged and only the wire body is trimmed.
    pub fn start_round(&mut self, mood: &str) -> bool {
        if self.is_loading() || mood.trim().is_empty() {
            return false;
        }

        self.request_id = self.request_id.wrapping_add(1);
        self.suggestion = None;
        self.notice = None;

        let cancel = CancellationToken::new();
        let request = ResolveRequest {
            mood: mood.to_string(),
            request_id: self.request_id,
            cancel: cancel.clone(),
        };

        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(request).is_ok());

        if sent {
            self.phase = ResolutionPhase::Loading;
            self.in_flight = Some(InFlight {
                request_id: self.request_id,
                mood: mood.to_string(),
                cancel,
            });
        } else {
            log::error!("Resolver worker unavailable, using fallback");
            self.apply_fallback(fallback_suggestion(mood));
        }
        true
    }

    /// Drain worker responses
    ///
    /// Returns the phase the round ended in when a response for the current
    /// round arrived during this call.
    pub fn poll_response(&mut self) -> Option<ResolutionPhase> {
        let mut finished = None;

        loop {
            let response = match self.response_rx.as_ref().map(|rx| rx.try_recv()) {
                Some(Ok(response)) => response,
                Some(Err(TryRecvError::Empty)) | None => break,
                Some(Err(TryRecvError::Disconnected)) => {
                    self.response_rx = None;
                    if self.is_loading() {
                        log::error!("Resolver worker disconnected mid-round");
                        let mood = self
                            .in_flight
                            .take()
                            .map(|in_flight| in_flight.mood)
                            .unwrap_or_default();
                        self.apply_fallback(fallback_suggestion(&mood));
                        finished = Some(self.phase);
                    }
                    break;
                }
            };

            if !self.is_current(&response) {
                log::debug!("Dropping stale response for request {}", response.request_id());
                continue;
            }

            match response {
                ResolveResponse::Resolved { suggestion, .. } => {
                    self.in_flight = None;
                    self.suggestion = Some(suggestion);
                    self.phase = ResolutionPhase::Resolved;
                    finished = Some(self.phase);
                }
                ResolveResponse::Fallback {
                    suggestion, reason, ..
                } => {
                    log::warn!("Showing fallback suggestion: {}", reason);
                    self.in_flight = None;
                    self.apply_fallback(suggestion);
                    finished = Some(self.phase);
                }
                ResolveResponse::Cancelled { .. } => {
                    self.in_flight = None;
                    self.phase = ResolutionPhase::Idle;
                }
            }
        }

        finished
    }

    /// Abandon the current round and return to Idle
    pub fn cancel_round(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            log::debug!("Cancelling request {}", in_flight.request_id);
            in_flight.cancel.cancel();
        }
        self.phase = ResolutionPhase::Idle;
        self.suggestion = None;
        self.notice = None;
    }

    fn is_current(&self, response: &ResolveResponse) -> bool {
        self.is_loading()
            && self
                .in_flight
                .as_ref()
                .is_some_and(|in_flight| in_flight.request_id == response.request_id())
    }

    fn apply_fallback(&mut self, suggestion: Suggestion) {
        self.suggestion = Some(suggestion);
        self.notice = Some(DEGRADED_NOTICE.to_string());
        self.phase = ResolutionPhase::FallbackResolved;
    }
}

#[cfg(test)]
#[path = "resolver_state_tests.rs"]
mod resolver_state_tests;
