//! Konami code matcher: ↑ ↑ ↓ ↓ ← → ← → B A.

#[cfg(test)]
#[path = "konami_test.rs"]
mod konami_test;

use std::collections::VecDeque;

const SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Sliding window over the most recent keys.
#[derive(Debug, Clone, Default)]
pub struct KonamiMatcher {
    recent: VecDeque<String>,
}

impl KonamiMatcher {
    /// Feed one `KeyboardEvent.key`. Returns `true` when the sequence completes.
    pub fn push(&mut self, key: &str) -> bool {
        let key = if key.chars().count() == 1 { key.to_lowercase() } else { key.to_owned() };
        self.recent.push_back(key);
        if self.recent.len() > SEQUENCE.len() {
            self.recent.pop_front();
        }
        if self.recent.iter().map(String::as_str).eq(SEQUENCE) {
            self.recent.clear();
            return true;
        }
        false
    }
}
