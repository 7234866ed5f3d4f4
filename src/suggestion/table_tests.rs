//! Tests for the suggestion table

use super::*;

#[test]
fn test_builtin_table_order() {
    let table = SuggestionTable::builtin();
    let keywords: Vec<&str> = table
        .entries()
        .iter()
        .map(|e| e.mood_keyword.as_str())
        .collect();
    assert_eq!(
        keywords,
        vec!["sad", "angry", "stressed", "bored", "anxious", "tired"]
    );
}

#[test]
fn test_from_entries_rejects_empty() {
    assert!(SuggestionTable::from_entries(Vec::new()).is_none());
}

#[test]
fn test_entry_keyword_is_lowercased() {
    let entry = SuggestionEntry::new("HANGRY", "Burrito", "Wrap it.", "Eat first, talk later.");
    assert_eq!(entry.mood_keyword, "hangry");
}

#[test]
fn test_first_match_uses_table_order() {
    let table = SuggestionTable::builtin();
    // both "sad" and "tired" occur, "sad" comes first in the table
    let entry = table.first_match("tired and sad").unwrap();
    assert_eq!(entry.mood_keyword, "sad");
}

#[test]
fn test_first_match_none() {
    let table = SuggestionTable::builtin();
    assert!(table.first_match("ecstatic").is_none());
}

#[test]
fn test_to_suggestion_carries_mood() {
    let table = SuggestionTable::builtin();
    let suggestion = table.get(2).unwrap().to_suggestion("so stressed");
    assert_eq!(suggestion.food, "Homemade Mac and Cheese");
    assert_eq!(suggestion.mood.as_deref(), Some("so stressed"));
}

#[test]
fn test_fallback_suggestion_keeps_mood() {
    let fallback = fallback_suggestion("meh");
    assert_eq!(fallback.food, "Instant Ramen at 3AM");
    assert_eq!(fallback.mood.as_deref(), Some("meh"));
}

#[test]
fn test_suggestion_deserializes_without_mood() {
    let json = r#"{"food": "Toast", "recipe": "Toast it.", "roast": "Bold choice."}"#;
    let suggestion: Suggestion = serde_json::from_str(json).unwrap();
    assert_eq!(suggestion.mood, None);
    assert_eq!(suggestion.food, "Toast");
}
