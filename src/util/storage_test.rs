#![cfg(not(feature = "csr"))]

use effects::theme::{Theme, ThemeState};

use super::*;

#[test]
fn get_is_none_outside_browser() {
    assert_eq!(LocalStore.get("theme"), None);
}

#[test]
fn set_is_noop_but_callable() {
    LocalStore.set("theme", "dark");
    assert_eq!(LocalStore.get("theme"), None);
}

#[test]
fn theme_state_still_toggles_without_storage() {
    let mut state = ThemeState::resolve(LocalStore, false);
    assert_eq!(state.toggle(), Theme::Dark);
    assert_eq!(state.toggle(), Theme::Light);
}
