//! Page flow
//!
//! Three pages visited in a fixed order with one mood string carried
//! between them.

use crate::mood::trimmed_mood;

/// Pages in visiting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    VibeCheck,
    RealityCheck,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::VibeCheck, Page::RealityCheck];

    /// Next page; the last page maps to itself
    pub fn next(self) -> Self {
        match self {
            Page::Home => Page::VibeCheck,
            Page::VibeCheck | Page::RealityCheck => Page::RealityCheck,
        }
    }

    /// Previous page; the first page maps to itself
    pub fn previous(self) -> Self {
        match self {
            Page::Home | Page::VibeCheck => Page::Home,
            Page::RealityCheck => Page::VibeCheck,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Page::Home => 0,
            Page::VibeCheck => 1,
            Page::RealityCheck => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "EAT YOUR FEELINGS",
            Page::VibeCheck => "VIBE CHECK 📱✨",
            Page::RealityCheck => "REALITY CHECK 📱💀",
        }
    }
}

/// Current page plus the mood being carried
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageFlow {
    page: Page,
    mood: String,
}

impl PageFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn mood(&self) -> &str {
        &self.mood
    }

    pub fn set_mood(&mut self, mood: &str) {
        self.mood = mood.to_string();
    }

    /// Whether the current mood may be submitted
    pub fn can_submit(&self) -> bool {
        trimmed_mood(&self.mood).is_some()
    }

    /// Move one page forward. Returns false at the last page.
    pub fn advance(&mut self) -> bool {
        let next = self.page.next();
        let moved = next != self.page;
        self.page = next;
        moved
    }

    /// Move one page back. Returns false at the first page.
    pub fn retreat(&mut self) -> bool {
        let previous = self.page.previous();
        let moved = previous != self.page;
        self.page = previous;
        moved
    }

    /// Submit the mood from the vibe check page
    ///
    /// Refused anywhere else or when the mood is blank.
    pub fn submit(&mut self) -> bool {
        if self.page != Page::VibeCheck || !self.can_submit() {
            return false;
        }
        self.advance()
    }

    /// "Try again": clear the mood and go back to the vibe check page
    pub fn reset(&mut self) {
        self.mood.clear();
        self.page = Page::VibeCheck;
    }

    /// Back to the very first page with nothing remembered
    pub fn start_over(&mut self) {
        self.mood.clear();
        self.page = Page::Home;
    }
}

#[cfg(test)]
#[path = "flow/flow_tests.rs"]
mod flow_tests;
