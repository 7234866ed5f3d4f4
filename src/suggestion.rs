//! Suggestion types
//!
//! A suggestion is the food, recipe and roast shown on the reality check page.
//! Entries for local matching live in an injected [`SuggestionTable`].

mod table;

pub use table::{SuggestionEntry, SuggestionTable, fallback_suggestion};

use serde::{Deserialize, Serialize};

/// One round's result, shown read-only until the user asks for another round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub food: String,
    pub recipe: String,
    pub roast: String,
    /// Mood the suggestion was produced for, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

#[cfg(test)]
#[path = "suggestion/table_tests.rs"]
mod table_tests;
