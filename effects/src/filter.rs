//! Project card filtering.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::consts::FILTER_ALL;
use crate::reveal::stagger_delay_ms;
use crate::task::Generation;

/// Planned transition for one card. `ticket` identifies the plan that
/// scheduled it; a deferred step runs only while
/// [`FilterState::is_current`] still holds for that ticket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardAction {
    /// Fade the card in after `delay_ms`.
    Show { delay_ms: f64, ticket: Generation },
    /// Fade the card out, then remove it from layout.
    Hide { ticket: Generation },
}

/// Split a `data-category` attribute into its space-separated tags.
#[must_use]
pub fn parse_categories(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_owned).collect()
}

#[must_use]
pub fn card_matches(filter: &str, categories: &[String]) -> bool {
    filter == FILTER_ALL || categories.iter().any(|c| c == filter)
}

#[derive(Debug, Clone)]
pub struct FilterState {
    current: String,
    tickets: Vec<Generation>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self { current: FILTER_ALL.to_owned(), tickets: Vec::new() }
    }
}

impl FilterState {
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Switch to `filter` and plan one action per card, in card order.
    ///
    /// Re-selecting the current filter returns `None` and changes nothing.
    /// Every card gets a fresh ticket, which supersedes whatever deferred
    /// step an earlier plan left pending for it.
    pub fn apply(&mut self, filter: &str, cards: &[Vec<String>]) -> Option<Vec<CardAction>> {
        if filter == self.current {
            return None;
        }
        self.current = filter.to_owned();
        self.tickets.resize(cards.len(), 0);
        Some(
            cards
                .iter()
                .zip(self.tickets.iter_mut())
                .enumerate()
                .map(|(index, (categories, ticket))| {
                    *ticket += 1;
                    let ticket = *ticket;
                    if card_matches(filter, categories) {
                        CardAction::Show { delay_ms: stagger_delay_ms(index), ticket }
                    } else {
                        CardAction::Hide { ticket }
                    }
                })
                .collect(),
        )
    }

    /// Whether the deferred step for card `index` scheduled under `ticket`
    /// may still run.
    #[must_use]
    pub fn is_current(&self, index: usize, ticket: Generation) -> bool {
        self.tickets.get(index) == Some(&ticket)
    }
}
