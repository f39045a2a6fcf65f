//! Light/dark theme model and preference persistence.
//!
//! The preference is a single key in a [`PreferenceStore`]. Startup only
//! reads it; the key is first written by a user toggle and overwritten on
//! every later toggle. While nothing is stored the page follows the system
//! colour scheme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::consts::THEME_STORAGE_KEY;

/// The closed set of page themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything outside the enumeration is ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Body class carrying the theme.
    #[must_use]
    pub fn body_class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }

    /// Value for `<meta name="theme-color">` on mobile browsers.
    #[must_use]
    pub fn meta_color(self) -> &'static str {
        match self {
            Self::Light => "#ffffff",
            Self::Dark => "#0f172a",
        }
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}

/// Key-value storage for the one durable page preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store, used when browser storage is unavailable and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Current theme plus the store it persists to.
#[derive(Debug)]
pub struct ThemeState<S: PreferenceStore> {
    current: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Resolve the startup theme: stored value, else system preference,
    /// else light. Does not write to the store.
    pub fn resolve(store: S, system_dark: bool) -> Self {
        let current = store
            .get(THEME_STORAGE_KEY)
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_else(|| Theme::from_dark(system_dark));
        Self { current, store }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist the new choice.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.set(THEME_STORAGE_KEY, self.current.as_str());
        self.current
    }

    /// Follow a system colour-scheme change. Returns the new theme when it
    /// was applied, `None` when a stored choice takes precedence.
    pub fn follow_system(&mut self, system_dark: bool) -> Option<Theme> {
        if self.has_stored_choice() {
            return None;
        }
        self.current = Theme::from_dark(system_dark);
        Some(self.current)
    }

    #[must_use]
    pub fn has_stored_choice(&self) -> bool {
        self.store.get(THEME_STORAGE_KEY).is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
