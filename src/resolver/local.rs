//! Local keyword resolver

use super::random::RandomSource;
use crate::suggestion::{Suggestion, SuggestionEntry, SuggestionTable};

/// Matches a mood against an injected table
///
/// The first entry whose keyword is a substring of the lowercased mood wins.
/// Without a match, an entry is picked through the random source.
#[derive(Debug)]
pub struct LocalResolver {
    table: SuggestionTable,
    random: Box<dyn RandomSource>,
}

impl LocalResolver {
    pub fn new(table: SuggestionTable, random: Box<dyn RandomSource>) -> Self {
        Self { table, random }
    }

    /// The keyword match for `mood`, if any. Deterministic.
    pub fn find_match(&self, mood: &str) -> Option<&SuggestionEntry> {
        self.table.first_match(&mood.to_lowercase())
    }

    /// Always produces a member of the table
    pub fn resolve(&mut self, mood: &str) -> Suggestion {
        if let Some(entry) = self.find_match(mood) {
            log::debug!("Mood matched keyword '{}'", entry.mood_keyword);
            return entry.to_suggestion(mood);
        }

        let index = self.random.pick_index(self.table.len());
        log::debug!("No keyword matched, picked entry {}", index);
        // pick_index is bounded by len, the clamp keeps a misbehaving source in range
        let entry = &self.table.entries()[index.min(self.table.len() - 1)];
        entry.to_suggestion(mood)
    }
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod local_tests;
