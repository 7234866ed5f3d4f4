//! Remote suggestion endpoint client
//!
//! Sends `POST {backend}/api/reality-check` with `{"mood": ...}` and expects
//! `{"food", "recipe", "roast"}` back. A single attempt, bounded by a timeout.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::ResolveError;
use crate::suggestion::Suggestion;

/// Path of the suggestion endpoint relative to the backend base URL
pub const REALITY_CHECK_PATH: &str = "/api/reality-check";

#[derive(Serialize)]
struct MoodRequest<'a> {
    mood: &'a str,
}

/// Response body as sent by the endpoint. Every field is optional here so
/// missing ones surface as `MalformedResponse` rather than a serde error.
#[derive(Deserialize)]
struct SuggestionBody {
    food: Option<String>,
    recipe: Option<String>,
    roast: Option<String>,
    #[serde(default)]
    mood: Option<String>,
}

/// HTTP client for the remote suggestion endpoint
#[derive(Debug)]
pub struct RemoteClient {
    client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl RemoteClient {
    /// Create a client for `backend_url`; a trailing slash is tolerated
    pub fn new(backend_url: &str, timeout: Duration) -> Result<Self, ResolveError> {
        let base = backend_url.trim().trim_end_matches('/');
        let endpoint = Url::parse(&format!("{}{}", base, REALITY_CHECK_PATH)).map_err(|e| {
            ResolveError::NotConfigured(format!("invalid backend URL '{}': {}", backend_url, e))
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ResolveError::NotConfigured(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Serialize the request body for `mood`
    pub fn build_request_body(mood: &str) -> Result<String, ResolveError> {
        serde_json::to_string(&MoodRequest { mood })
            .map_err(|e| ResolveError::MalformedResponse(e.to_string()))
    }

    /// Resolve `mood` against the endpoint
    ///
    /// The mood is trimmed first; an empty mood fails without a request.
    pub async fn resolve(
        &self,
        mood: &str,
        cancel: &CancellationToken,
    ) -> Result<Suggestion, ResolveError> {
        let mood = mood.trim();
        if mood.is_empty() {
            return Err(ResolveError::EmptyMood);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::debug!("Remote request cancelled");
                Err(ResolveError::Cancelled)
            }
            result = self.send(mood) => result,
        }
    }

    async fn send(&self, mood: &str) -> Result<Suggestion, ResolveError> {
        let body = Self::build_request_body(mood)?;
        log::debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            return Err(ResolveError::Api {
                code: status.as_u16(),
                message: text,
            });
        }

        parse_suggestion(&text)
    }

    fn map_transport_error(&self, error: reqwest::Error) -> ResolveError {
        if error.is_timeout() {
            ResolveError::Timeout(self.timeout)
        } else {
            ResolveError::Network(error.to_string())
        }
    }
}

/// Parse and validate a response body
///
/// `food`, `recipe` and `roast` must be present and non-blank. Values pass
/// through untouched.
pub(crate) fn parse_suggestion(body: &str) -> Result<Suggestion, ResolveError> {
    let parsed: SuggestionBody =
        serde_json::from_str(body).map_err(|e| ResolveError::MalformedResponse(e.to_string()))?;

    Ok(Suggestion {
        food: required_field(parsed.food, "food")?,
        recipe: required_field(parsed.recipe, "recipe")?,
        roast: required_field(parsed.roast, "roast")?,
        mood: parsed.mood,
    })
}

fn required_field(value: Option<String>, name: &str) -> Result<String, ResolveError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ResolveError::MalformedResponse(format!("missing field '{}'", name)))
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod remote_tests;
