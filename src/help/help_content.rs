/// Keyboard shortcuts shown in the help popup.
/// An empty key marks a section header; an empty pair is a blank line.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("", "EVERYWHERE"),
    ("F1", "Toggle this help"),
    ("Ctrl+C", "Quit"),
    ("", ""),
    ("", "HOME"),
    ("Enter/Space/→", "Start the vibe check"),
    ("q/Esc", "Quit"),
    ("", ""),
    ("", "VIBE CHECK"),
    ("Enter", "Submit your mood (needs some text)"),
    ("Tab/Shift+Tab", "Cycle through quick moods"),
    ("Esc", "Back to home"),
    ("", ""),
    ("", "REALITY CHECK"),
    ("r", "Get roasted again (new mood)"),
    ("s", "Start over from home"),
    ("Esc/←/b", "Back to the vibe check"),
    ("q", "Quit"),
];

pub const HELP_FOOTER: &str = "Esc, F1 or q to close";
