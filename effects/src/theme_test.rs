use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn toggled_flips_between_light_and_dark() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn parse_accepts_only_known_names() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse(" dark "), Some(Theme::Dark));
    assert_eq!(Theme::parse("solarized"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn visual_attributes_match_theme() {
    assert_eq!(Theme::Light.body_class(), "theme-light");
    assert_eq!(Theme::Dark.body_class(), "theme-dark");
    assert_eq!(Theme::Light.meta_color(), "#ffffff");
    assert_eq!(Theme::Dark.meta_color(), "#0f172a");
}

// =============================================================
// ThemeState
// =============================================================

#[test]
fn resolve_prefers_stored_value_over_system() {
    let store = MemoryStore::default();
    store.set("theme", "light");
    let state = ThemeState::resolve(store, true);
    assert_eq!(state.current(), Theme::Light);
}

#[test]
fn resolve_falls_back_to_system_preference() {
    assert_eq!(ThemeState::resolve(MemoryStore::default(), true).current(), Theme::Dark);
    assert_eq!(ThemeState::resolve(MemoryStore::default(), false).current(), Theme::Light);
}

#[test]
fn resolve_ignores_garbage_in_storage() {
    let store = MemoryStore::default();
    store.set("theme", "purple");
    assert_eq!(ThemeState::resolve(store, false).current(), Theme::Light);
}

#[test]
fn startup_does_not_write_preference() {
    let state = ThemeState::resolve(MemoryStore::default(), true);
    assert!(!state.has_stored_choice());
    assert_eq!(state.store().get("theme"), None);
}

#[test]
fn toggle_persists_every_choice() {
    let mut state = ThemeState::resolve(MemoryStore::default(), false);
    assert_eq!(state.toggle(), Theme::Dark);
    assert_eq!(state.store().get("theme").as_deref(), Some("dark"));
    assert_eq!(state.toggle(), Theme::Light);
    assert_eq!(state.store().get("theme").as_deref(), Some("light"));
}

#[test]
fn double_toggle_is_idempotent() {
    let mut state = ThemeState::resolve(MemoryStore::default(), true);
    let before = state.current();
    state.toggle();
    state.toggle();
    assert_eq!(state.current(), before);
    assert_eq!(state.current().body_class(), before.body_class());
    assert_eq!(state.store().get("theme").as_deref(), Some(before.as_str()));
}

#[test]
fn follow_system_only_without_stored_choice() {
    let mut state = ThemeState::resolve(MemoryStore::default(), false);
    assert_eq!(state.follow_system(true), Some(Theme::Dark));

    state.toggle();
    assert_eq!(state.follow_system(true), None);
    assert_eq!(state.current(), Theme::Light);
}
