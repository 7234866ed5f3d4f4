//! Tests for once

use std::time::Duration;

use super::*;
use crate::resolver::{FixedIndex, LocalResolver, RemoteClient};
use crate::suggestion::SuggestionTable;

fn local_resolver() -> Resolver {
    Resolver::Local {
        resolver: LocalResolver::new(SuggestionTable::builtin(), Box::new(FixedIndex(0))),
        delay: Duration::ZERO,
    }
}

#[test]
fn test_resolve_once_matches_keyword() {
    let resolution =
        resolve_once(local_resolver(), "I'm feeling stressed and overwhelmed").unwrap();

    assert!(!resolution.is_fallback());
    assert_eq!(resolution.suggestion().food, "Homemade Mac and Cheese");
    assert_eq!(
        resolution.suggestion().mood.as_deref(),
        Some("I'm feeling stressed and overwhelmed")
    );
}

#[test]
fn test_resolve_once_keeps_mood_as_given() {
    let resolution = resolve_once(local_resolver(), "   sad   ").unwrap();
    assert_eq!(resolution.suggestion().food, "Spicy Thai Green Curry");
    assert_eq!(resolution.suggestion().mood.as_deref(), Some("   sad   "));
}

#[test]
fn test_resolve_once_rejects_blank_mood() {
    let result = resolve_once(local_resolver(), "  \n ");
    assert!(matches!(result, Err(FeelingsError::EmptyMood)));
}

#[test]
fn test_resolve_once_unreachable_backend_falls_back() {
    // Grab a free port, then close it so the connection is refused
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = format!("http://{}", addr);
    let client = RemoteClient::new(&url, Duration::from_secs(2)).unwrap();
    let resolution = resolve_once(Resolver::Remote(client), "sad").unwrap();

    assert!(resolution.is_fallback());
    assert_eq!(resolution.suggestion().food, "Instant Ramen at 3AM");
    assert_eq!(resolution.suggestion().mood.as_deref(), Some("sad"));
    assert_eq!(degraded_notice(&resolution), Some(DEGRADED_NOTICE));
}

#[test]
fn test_format_resolution_lists_all_parts() {
    let resolution = resolve_once(local_resolver(), "so tired").unwrap();
    let text = format_resolution(&resolution);

    let suggestion = resolution.suggestion();
    assert!(text.contains(&suggestion.food));
    assert!(text.contains(&suggestion.recipe));
    assert!(text.contains(&suggestion.roast));
    assert!(text.contains("UNHINGED REALITY CHECK"));
    assert!(text.starts_with("🍽️  Energy-Packed Smoothie Bowl\n\n"));
    assert!(text.ends_with(&format!("{}\n", suggestion.roast)));
    assert_eq!(degraded_notice(&resolution), None);
}
