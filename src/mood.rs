//! Mood input helpers

/// Ready-made moods offered on the vibe check page
pub const QUICK_MOODS: &[&str] = &[
    "feeling sad fr 😭",
    "stressed and tired of this life 💀",
    "angry at literally everything rn 🔥",
    "anxious and overthinking EVERYTHING 🌪️",
    "lonely and touch-starved bestie 💔",
    "bored out of my mind periodt ✋",
];

/// The mood as submitted: trimmed, or `None` when nothing is left
pub fn trimmed_mood(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
