//! Tests for the page flow

use super::*;
use proptest::prelude::*;

#[test]
fn test_starts_at_home_with_empty_mood() {
    let flow = PageFlow::new();
    assert_eq!(flow.page(), Page::Home);
    assert_eq!(flow.mood(), "");
}

#[test]
fn test_advance_reaches_terminal_then_noop() {
    let mut flow = PageFlow::new();
    for _ in 0..Page::ALL.len() - 1 {
        assert!(flow.advance());
    }
    assert_eq!(flow.page(), Page::RealityCheck);

    assert!(!flow.advance());
    assert_eq!(flow.page(), Page::RealityCheck);
}

#[test]
fn test_retreat_from_home_is_noop() {
    let mut flow = PageFlow::new();
    assert!(!flow.retreat());
    assert_eq!(flow.page(), Page::Home);
}

#[test]
fn test_retreat_walks_back() {
    let mut flow = PageFlow::new();
    flow.advance();
    flow.advance();

    assert!(flow.retreat());
    assert_eq!(flow.page(), Page::VibeCheck);
    assert!(flow.retreat());
    assert_eq!(flow.page(), Page::Home);
}

#[test]
fn test_reset_from_terminal_clears_mood() {
    let mut flow = PageFlow::new();
    flow.advance();
    flow.set_mood("stressed");
    assert!(flow.submit());

    flow.reset();

    assert_eq!(flow.page(), Page::VibeCheck);
    assert_eq!(flow.mood(), "");
}

#[test]
fn test_start_over_returns_home() {
    let mut flow = PageFlow::new();
    flow.advance();
    flow.set_mood("bored");
    flow.submit();

    flow.start_over();

    assert_eq!(flow.page(), Page::Home);
    assert_eq!(flow.mood(), "");
}

#[test]
fn test_submit_refused_for_empty_mood() {
    let mut flow = PageFlow::new();
    flow.advance();

    assert!(!flow.can_submit());
    assert!(!flow.submit());
    assert_eq!(flow.page(), Page::VibeCheck);

    flow.set_mood("   ");
    assert!(!flow.submit());
    assert_eq!(flow.page(), Page::VibeCheck);
}

#[test]
fn test_submit_only_from_vibe_check() {
    let mut flow = PageFlow::new();
    flow.set_mood("sad");
    assert!(!flow.submit());
    assert_eq!(flow.page(), Page::Home);
}

#[test]
fn test_retreat_keeps_mood() {
    let mut flow = PageFlow::new();
    flow.advance();
    flow.set_mood("angry");
    flow.submit();

    flow.retreat();

    assert_eq!(flow.mood(), "angry");
}

#[test]
fn test_page_index_matches_order() {
    for (i, page) in Page::ALL.iter().enumerate() {
        assert_eq!(page.index(), i);
    }
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Advance,
    Retreat,
    Reset,
    StartOver,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Advance),
        Just(Action::Retreat),
        Just(Action::Reset),
        Just(Action::StartOver),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Every action sequence keeps the flow on a valid page, and a page
    // change is always a single step or an explicit reset.
    #[test]
    fn prop_transitions_are_total(actions in prop::collection::vec(action(), 0..40)) {
        let mut flow = PageFlow::new();
        flow.set_mood("sad");

        for action in actions {
            let before = flow.page().index() as i32;
            match action {
                Action::Advance => { flow.advance(); }
                Action::Retreat => { flow.retreat(); }
                Action::Reset => {
                    flow.reset();
                    prop_assert_eq!(flow.page(), Page::VibeCheck);
                    prop_assert_eq!(flow.mood(), "");
                    continue;
                }
                Action::StartOver => {
                    flow.start_over();
                    prop_assert_eq!(flow.page(), Page::Home);
                    continue;
                }
            }
            let after = flow.page().index() as i32;
            prop_assert!((after - before).abs() <= 1);
        }
    }
}
