//! Typing-text loop: type a phrase, hold, delete it, move on, forever.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use serde::Deserialize;

use crate::consts::{TYPING_DELETE_MS, TYPING_GAP_MS, TYPING_HOLD_MS, TYPING_TYPE_MS};
use crate::task::{Generation, TaskFlag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypingSpeeds {
    pub type_ms: u32,
    pub delete_ms: u32,
    /// Pause with the full phrase on screen.
    pub hold_ms: u32,
    /// Pause with an empty line before the next phrase.
    pub gap_ms: u32,
}

impl Default for TypingSpeeds {
    fn default() -> Self {
        Self { type_ms: TYPING_TYPE_MS, delete_ms: TYPING_DELETE_MS, hold_ms: TYPING_HOLD_MS, gap_ms: TYPING_GAP_MS }
    }
}

/// Text to render now and how long to wait before the next step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct TypingLoop {
    phrases: Vec<Vec<char>>,
    speeds: TypingSpeeds,
    phrase: usize,
    shown: usize,
    deleting: bool,
    flag: TaskFlag,
}

impl TypingLoop {
    /// Blank phrases are dropped.
    #[must_use]
    pub fn new(phrases: Vec<String>, speeds: TypingSpeeds) -> Self {
        let phrases = phrases
            .into_iter()
            .filter(|p| !p.trim().is_empty())
            .map(|p| p.chars().collect())
            .collect();
        Self { phrases, speeds, phrase: 0, shown: 0, deleting: false, flag: TaskFlag::default() }
    }

    /// Begin (or resume) the loop. `None` when already running or when there
    /// is nothing to type.
    pub fn start(&mut self) -> Option<Generation> {
        if self.phrases.is_empty() {
            return None;
        }
        self.flag.start()
    }

    pub fn stop(&mut self) {
        self.flag.stop();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.flag.is_active()
    }

    /// Advance one character. Returns `None` when the chain for `generation`
    /// should end.
    pub fn step(&mut self, generation: Generation) -> Option<TypingStep> {
        if !self.flag.is_current(generation) {
            return None;
        }
        let len = self.phrases.get(self.phrase)?.len();
        let delay_ms = if self.deleting {
            self.shown = self.shown.saturating_sub(1);
            if self.shown == 0 {
                self.deleting = false;
                self.phrase = (self.phrase + 1) % self.phrases.len();
                self.speeds.gap_ms
            } else {
                self.speeds.delete_ms
            }
        } else {
            self.shown = (self.shown + 1).min(len);
            if self.shown == len {
                self.deleting = true;
                self.speeds.hold_ms
            } else {
                self.speeds.type_ms
            }
        };
        Some(TypingStep { text: self.current_text(), delay_ms })
    }

    #[must_use]
    pub fn current_text(&self) -> String {
        self.phrases
            .get(self.phrase)
            .map(|chars| chars.iter().take(self.shown).collect())
            .unwrap_or_default()
    }
}

/// Parse a `data-typing` attribute: a JSON array of phrases, or a single
/// plain phrase.
#[must_use]
pub fn parse_phrases(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(phrases) => phrases,
        Err(_) if raw.trim().is_empty() => Vec::new(),
        Err(_) => vec![raw.trim().to_owned()],
    }
}
