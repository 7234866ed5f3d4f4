//! Non-interactive single round (`--once <MOOD>`)

use tokio::runtime::Builder;
use tokio_util::sync::CancellationToken;

use crate::error::FeelingsError;
use crate::mood::trimmed_mood;
use crate::resolver::{DEGRADED_NOTICE, Resolution, ResolveError, Resolver};

/// Resolve one mood on the calling thread
///
/// A blank mood is rejected; otherwise the mood is passed on as given.
pub fn resolve_once(mut resolver: Resolver, mood: &str) -> Result<Resolution, FeelingsError> {
    if trimmed_mood(mood).is_none() {
        return Err(FeelingsError::EmptyMood);
    }

    let runtime = Builder::new_current_thread().enable_all().build()?;
    let cancel = CancellationToken::new();

    runtime
        .block_on(resolver.resolve(mood, &cancel))
        .ok_or(FeelingsError::Resolve(ResolveError::Cancelled))
}

/// Plain-text rendering of a suggestion for stdout
pub fn format_resolution(resolution: &Resolution) -> String {
    let suggestion = resolution.suggestion();
    format!(
        "🍽️  {}\n\nRecipe (if you can even handle it) 💀\n{}\n\nUNHINGED REALITY CHECK ✨💀\n{}\n",
        suggestion.food, suggestion.recipe, suggestion.roast
    )
}

/// Notice to print alongside a fallback suggestion
pub fn degraded_notice(resolution: &Resolution) -> Option<&'static str> {
    resolution.is_fallback().then_some(DEGRADED_NOTICE)
}

#[cfg(test)]
#[path = "once_tests.rs"]
mod once_tests;
