#![allow(clippy::float_cmp)]

use super::*;

fn cards() -> Vec<Vec<String>> {
    vec![
        parse_categories("rust cli"),
        parse_categories("web"),
        parse_categories("rust  web"),
        parse_categories(""),
    ]
}

#[test]
fn parse_categories_splits_on_whitespace() {
    assert_eq!(parse_categories(" rust\tweb  "), vec!["rust".to_owned(), "web".to_owned()]);
    assert!(parse_categories("").is_empty());
}

#[test]
fn all_matches_every_card() {
    assert!(card_matches("all", &[]));
    assert!(card_matches("all", &parse_categories("web")));
}

#[test]
fn reselecting_current_filter_is_noop() {
    let mut state = FilterState::default();
    assert_eq!(state.apply("all", &cards()), None);
    assert!(state.apply("web", &cards()).is_some());
    assert_eq!(state.apply("web", &cards()), None);
    assert_eq!(state.current(), "web");
}

#[test]
fn filter_plans_show_and_hide_with_stagger() {
    let mut state = FilterState::default();
    let plan = state.apply("rust", &cards()).unwrap_or_default();
    assert_eq!(
        plan,
        vec![
            CardAction::Show { delay_ms: 0.0, ticket: 1 },
            CardAction::Hide { ticket: 1 },
            CardAction::Show { delay_ms: 200.0, ticket: 1 },
            CardAction::Hide { ticket: 1 },
        ]
    );
}

#[test]
fn returning_to_all_shows_everything() {
    let mut state = FilterState::default();
    state.apply("cli", &cards());
    let plan = state.apply("all", &cards()).unwrap_or_default();
    assert_eq!(plan.len(), 4);
    assert!(plan.iter().all(|a| matches!(a, CardAction::Show { .. })));
}

#[test]
fn show_after_quick_hide_cancels_pending_removal() {
    let mut state = FilterState::default();
    let hidden = state.apply("web", &cards()).unwrap_or_default();
    let CardAction::Hide { ticket: hide_ticket } = hidden[0] else {
        unreachable!("card 0 does not match web");
    };
    assert!(state.is_current(0, hide_ticket));

    // "all" arrives before the hide's removal timer fires.
    let shown = state.apply("all", &cards()).unwrap_or_default();
    let CardAction::Show { ticket: show_ticket, .. } = shown[0] else {
        unreachable!("all shows every card");
    };
    assert!(!state.is_current(0, hide_ticket));
    assert!(state.is_current(0, show_ticket));
}

#[test]
fn hide_after_quick_show_cancels_pending_reveal() {
    let mut state = FilterState::default();
    let plan = state.apply("rust", &cards()).unwrap_or_default();
    let CardAction::Show { ticket, delay_ms } = plan[2] else {
        unreachable!("card 2 matches rust");
    };
    assert_eq!(delay_ms, 200.0);

    state.apply("cli", &cards());
    assert!(!state.is_current(2, ticket));
}

#[test]
fn unknown_card_index_is_never_current() {
    let mut state = FilterState::default();
    state.apply("web", &cards());
    assert!(!state.is_current(9, 1));
}
