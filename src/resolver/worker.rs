//! Resolver Worker Thread
//!
//! Resolves moods in a background thread so the UI keeps drawing the loading
//! spinner. Receives requests via channel, runs them on a single-threaded
//! tokio runtime, and sends the outcome back tagged with its request id.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::JoinHandle;

use tokio::runtime::{Builder, Runtime};
use tokio_util::sync::CancellationToken;

use super::{Resolution, Resolver};
use crate::suggestion::{Suggestion, fallback_suggestion};

/// Request sent to the worker thread
#[derive(Debug)]
pub struct ResolveRequest {
    pub mood: String,
    /// Unique ID for this round, used to filter stale responses
    pub request_id: u64,
    /// Fired when the page that asked is left before the answer arrives
    pub cancel: CancellationToken,
}

/// Response messages received from the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveResponse {
    /// The resolver produced a suggestion
    Resolved {
        suggestion: Suggestion,
        request_id: u64,
    },
    /// Resolution failed and the fallback suggestion was substituted
    Fallback {
        suggestion: Suggestion,
        reason: String,
        request_id: u64,
    },
    /// The round was cancelled before it finished
    Cancelled { request_id: u64 },
}

impl ResolveResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            ResolveResponse::Resolved { request_id, .. }
            | ResolveResponse::Fallback { request_id, .. }
            | ResolveResponse::Cancelled { request_id } => *request_id,
        }
    }
}

/// Spawn the resolver worker thread
///
/// The thread exits once every request sender has been dropped.
pub fn spawn_worker(
    resolver: Resolver,
    request_rx: Receiver<ResolveRequest>,
    response_tx: Sender<ResolveResponse>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        worker_loop(resolver, request_rx, response_tx);
    })
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    mut resolver: Resolver,
    request_rx: Receiver<ResolveRequest>,
    response_tx: Sender<ResolveResponse>,
) {
    let runtime = match Builder::new_current_thread().enable_all().build() {
        Ok(rt) => Some(rt),
        Err(e) => {
            log::error!("Failed to start resolver runtime: {}", e);
            None
        }
    };

    while let Ok(request) = request_rx.recv() {
        let response = handle_request(runtime.as_ref(), &mut resolver, request);
        if response_tx.send(response).is_err() {
            // UI side is gone, nobody to answer
            break;
        }
    }

    log::debug!("Resolver worker thread shutting down");
}

fn handle_request(
    runtime: Option<&Runtime>,
    resolver: &mut Resolver,
    request: ResolveRequest,
) -> ResolveResponse {
    let ResolveRequest {
        mood,
        request_id,
        cancel,
    } = request;

    if cancel.is_cancelled() {
        log::debug!("Request {} cancelled before start", request_id);
        return ResolveResponse::Cancelled { request_id };
    }

    let Some(runtime) = runtime else {
        return ResolveResponse::Fallback {
            suggestion: fallback_suggestion(&mood),
            reason: "resolver runtime unavailable".to_string(),
            request_id,
        };
    };

    match runtime.block_on(resolver.resolve(&mood, &cancel)) {
        Some(Resolution::Resolved(suggestion)) => ResolveResponse::Resolved {
            suggestion,
            request_id,
        },
        Some(Resolution::Fallback { suggestion, reason }) => ResolveResponse::Fallback {
            suggestion,
            reason,
            request_id,
        },
        None => {
            log::debug!("Request {} cancelled in flight", request_id);
            ResolveResponse::Cancelled { request_id }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
