//! Suggestion resolution
//!
//! One strategy runs per deployment: a local keyword lookup with a random
//! fallback, or a remote endpoint with a fixed fallback suggestion. The
//! [`worker`] runs either off the UI thread.

use std::time::Duration;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::config::{ResolverConfig, ResolverMode};
use crate::suggestion::{Suggestion, SuggestionTable, fallback_suggestion};

mod local;
mod random;
mod remote;
pub mod resolver_state;
pub mod worker;

pub use local::LocalResolver;
pub use random::{FixedIndex, RandomSource, ThreadRandom};
pub use remote::{REALITY_CHECK_PATH, RemoteClient};
pub use resolver_state::{DEGRADED_NOTICE, ResolutionPhase, ResolverState};

/// Errors that can occur while resolving a mood
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Resolver cannot be built from the given configuration
    #[error("Resolver not configured: {0}")]
    NotConfigured(String),

    /// Mood was empty after trimming; no request is made
    #[error("Mood is empty")]
    EmptyMood,

    /// Connection failure
    #[error("Network error: {0}")]
    Network(String),

    /// No response within the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Endpoint answered with a non-2xx status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Body was not JSON or lacked food, recipe or roast
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Round was abandoned before an answer arrived
    #[error("Request cancelled")]
    Cancelled,
}

/// Outcome of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(Suggestion),
    /// Remote resolution failed and the fixed fallback was substituted
    Fallback { suggestion: Suggestion, reason: String },
}

impl Resolution {
    pub fn suggestion(&self) -> &Suggestion {
        match self {
            Resolution::Resolved(suggestion) => suggestion,
            Resolution::Fallback { suggestion, .. } => suggestion,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback { .. })
    }
}

/// The resolution strategy for this deployment
#[derive(Debug)]
pub enum Resolver {
    Local {
        resolver: LocalResolver,
        /// Artificial "thinking" time before the answer is delivered
        delay: Duration,
    },
    Remote(RemoteClient),
}

impl Resolver {
    /// Build the resolver selected by `config`
    ///
    /// Remote mode without a backend URL is a configuration error.
    pub fn from_config(config: &ResolverConfig) -> Result<Self, ResolveError> {
        match config.effective_mode() {
            ResolverMode::Local => Ok(Self::local(config)),
            ResolverMode::Remote => {
                let url = config.backend_url().ok_or_else(|| {
                    ResolveError::NotConfigured(
                        "remote mode needs a backend URL (set EYF_BACKEND_URL or [resolver] backend_url)"
                            .to_string(),
                    )
                })?;
                let client = RemoteClient::new(url, Duration::from_secs(config.timeout_secs))?;
                Ok(Resolver::Remote(client))
            }
        }
    }

    /// Local resolver over the built-in table, ignoring the configured mode
    pub fn local(config: &ResolverConfig) -> Self {
        Resolver::Local {
            resolver: LocalResolver::new(SuggestionTable::builtin(), Box::new(ThreadRandom::new())),
            delay: Duration::from_millis(config.simulated_delay_ms),
        }
    }

    pub fn mode(&self) -> ResolverMode {
        match self {
            Resolver::Local { .. } => ResolverMode::Local,
            Resolver::Remote(_) => ResolverMode::Remote,
        }
    }

    /// Resolve one round
    ///
    /// Remote failures are logged and replaced by the fallback suggestion.
    /// Returns `None` only when `cancel` fires first.
    pub async fn resolve(&mut self, mood: &str, cancel: &CancellationToken) -> Option<Resolution> {
        match self {
            Resolver::Local { resolver, delay } => {
                if !delay.is_zero() {
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => return None,
                        _ = tokio::time::sleep(*delay) => {}
                    }
                }
                Some(Resolution::Resolved(resolver.resolve(mood)))
            }
            Resolver::Remote(client) => match client.resolve(mood, cancel).await {
                Ok(suggestion) => Some(Resolution::Resolved(suggestion)),
                Err(ResolveError::Cancelled) => None,
                Err(e) => {
                    log::warn!("Remote suggestion failed, using fallback: {}", e);
                    Some(Resolution::Fallback {
                        suggestion: fallback_suggestion(mood),
                        reason: e.to_string(),
                    })
                }
            },
        }
    }
}
